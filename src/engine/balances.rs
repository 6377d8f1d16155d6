//! Net balances per participant
//!
//! Positive means the participant should receive money, negative means they
//! owe money, zero means settled. Entries keep canonical participant order.

use serde::Serialize;

use crate::models::{Money, Participant};

use super::settle::Settlement;

/// Ordered participant balances
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Balances {
    entries: Vec<(Participant, Money)>,
}

impl Balances {
    pub fn new(entries: Vec<(Participant, Money)>) -> Self {
        Self { entries }
    }

    /// Balance of a participant, if they are part of this set
    pub fn get(&self, participant: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|(p, _)| p.as_str() == participant)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Participant, Money)> {
        self.entries.iter().map(|(p, amount)| (p, *amount))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all balances; zero up to rounding drift
    pub fn total(&self) -> Money {
        self.entries.iter().map(|(_, amount)| *amount).sum()
    }

    /// Number of participants owed money
    pub fn creditor_count(&self) -> usize {
        self.entries.iter().filter(|(_, a)| a.is_positive()).count()
    }

    /// Number of participants owing money
    pub fn debtor_count(&self) -> usize {
        self.entries.iter().filter(|(_, a)| a.is_negative()).count()
    }

    /// Whether every balance is exactly zero
    pub fn is_settled(&self) -> bool {
        self.entries.iter().all(|(_, a)| a.is_zero())
    }

    /// Apply settlements: each payer's balance rises, each payee's falls
    pub fn apply(&mut self, settlements: &[Settlement]) {
        for settlement in settlements {
            for (participant, amount) in self.entries.iter_mut() {
                if *participant == settlement.from {
                    *amount += settlement.amount;
                } else if *participant == settlement.to {
                    *amount -= settlement.amount;
                }
            }
        }
    }
}

impl FromIterator<(Participant, Money)> for Balances {
    fn from_iter<I: IntoIterator<Item = (Participant, Money)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances(entries: &[(&str, i64)]) -> Balances {
        entries
            .iter()
            .map(|(name, cents)| (Participant::new(name), Money::from_cents(*cents)))
            .collect()
    }

    #[test]
    fn test_counts_and_total() {
        let b = balances(&[("A", 200), ("B", -150), ("C", 0), ("D", -50)]);
        assert_eq!(b.creditor_count(), 1);
        assert_eq!(b.debtor_count(), 2);
        assert_eq!(b.total(), Money::zero());
        assert!(!b.is_settled());
    }

    #[test]
    fn test_keeps_order() {
        let b = balances(&[("C", 1), ("A", -1)]);
        let names: Vec<_> = b.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(names, vec!["C", "A"]);
    }

    #[test]
    fn test_apply_settlement() {
        let mut b = balances(&[("A", 200), ("B", -200)]);
        b.apply(&[Settlement {
            from: "B".into(),
            to: "A".into(),
            amount: Money::from_cents(200),
        }]);
        assert!(b.is_settled());
    }
}
