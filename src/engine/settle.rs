//! Settlement optimizer
//!
//! Reduces net balances to a list of transfers with greedy largest-first
//! matching. Not globally minimal, but it emits at most
//! `debtors + creditors - 1` transfers. When the balances sum to zero every
//! one is cleared; otherwise the rounding residue stays with the last
//! unmatched party.

use serde::Serialize;
use std::fmt;

use crate::models::{Money, Participant};

use super::balances::Balances;

/// A transfer from a net debtor to a net creditor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub from: Participant,
    pub to: Participant,
    pub amount: Money,
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} owes {} {}", self.from, self.to, self.amount)
    }
}

/// Compute the transfers that settle a set of balances
///
/// Creditors and debtors are each sorted by magnitude, largest first. The
/// sort is stable, so equal magnitudes keep their canonical order and the
/// output is deterministic for a given input.
pub fn compute_settlements(balances: &Balances) -> Vec<Settlement> {
    let mut creditors: Vec<(&Participant, Money)> = balances
        .iter()
        .filter(|(_, amount)| amount.is_positive())
        .collect();
    let mut debtors: Vec<(&Participant, Money)> = balances
        .iter()
        .filter(|(_, amount)| amount.is_negative())
        .map(|(p, amount)| (p, amount.abs()))
        .collect();

    creditors.sort_by(|a, b| b.1.cmp(&a.1));
    debtors.sort_by(|a, b| b.1.cmp(&a.1));

    let mut settlements = Vec::new();

    for (debtor, debt) in debtors.iter_mut() {
        for (creditor, credit) in creditors.iter_mut() {
            if debt.is_zero() {
                break;
            }

            let amount = (*debt).min(*credit);
            if amount.is_positive() {
                settlements.push(Settlement {
                    from: (*debtor).clone(),
                    to: (*creditor).clone(),
                    amount,
                });
                *debt -= amount;
                *credit -= amount;
            }
        }

        if debt.is_positive() {
            tracing::debug!(debtor = %debtor, remaining = %debt, "debt left after all credit used");
        }
    }

    tracing::debug!(
        creditors = creditors.len(),
        debtors = debtors.len(),
        transfers = settlements.len(),
        "computed settlements"
    );

    settlements
}
