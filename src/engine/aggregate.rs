//! Expense aggregation
//!
//! Folds a trip's expenses into per-person spend, per-person fair share and
//! per-category totals in a single pass, then derives net balances.

use std::collections::BTreeMap;

use crate::models::{Expense, Money, Participant};

use super::balances::Balances;

/// Totals accumulated over a set of expenses
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    /// Sum of every expense amount
    pub total: Money,

    /// Amount each participant paid
    pub person_spent: BTreeMap<Participant, Money>,

    /// Each participant's accumulated fair share, in unrounded cents
    pub person_owes: BTreeMap<Participant, f64>,

    /// Amount spent per category
    pub category_spent: BTreeMap<String, Money>,

    /// Number of expenses folded in
    pub expense_count: usize,
}

impl Aggregates {
    /// Amount a participant paid (zero when absent)
    pub fn spent(&self, participant: &str) -> Money {
        self.person_spent
            .get(participant)
            .copied()
            .unwrap_or_default()
    }

    /// A participant's fair share rounded to cents (zero when absent)
    pub fn fair_share(&self, participant: &str) -> Money {
        Money::from_cents_rounded(self.owes_cents(participant))
    }

    fn owes_cents(&self, participant: &str) -> f64 {
        self.person_owes.get(participant).copied().unwrap_or(0.0)
    }

    /// Net balance per canonical participant
    ///
    /// Each balance is `spent - fair share`, rounded once to whole cents.
    /// Participants outside the canonical list never appear.
    pub fn balances(&self, participants: &[Participant]) -> Balances {
        participants
            .iter()
            .map(|p| {
                let net = self.spent(p.as_str()).cents() as f64 - self.owes_cents(p.as_str());
                (p.clone(), Money::from_cents_rounded(net))
            })
            .collect()
    }
}

/// Aggregate expenses against the canonical participant list
///
/// The participant list supplies the default split for expenses that do not
/// name their included participants. Expenses whose included list is empty
/// still count toward the total and their category but add no fair shares.
pub fn compute_aggregates(expenses: &[Expense], participants: &[Participant]) -> Aggregates {
    let mut aggregates = Aggregates::default();

    for expense in expenses {
        let amount = expense.amount;
        aggregates.total += amount;
        aggregates.expense_count += 1;

        *aggregates
            .person_spent
            .entry(expense.paid_by.clone())
            .or_default() += amount;

        *aggregates
            .category_spent
            .entry(expense.category_name().to_string())
            .or_default() += amount;

        let included = expense.split_among(participants);
        if included.is_empty() {
            tracing::warn!(expense = %expense.id, %amount, "expense has nobody included, skipping fair share");
            continue;
        }

        let share = amount.cents() as f64 / included.len() as f64;
        for participant in included {
            *aggregates
                .person_owes
                .entry(participant.clone())
                .or_insert(0.0) += share;
        }
    }

    tracing::debug!(
        expenses = aggregates.expense_count,
        total = %aggregates.total,
        categories = aggregates.category_spent.len(),
        "aggregated expenses"
    );

    aggregates
}

/// Aggregate expenses and derive balances in one call
pub fn compute_balances(
    expenses: &[Expense],
    participants: &[Participant],
) -> (Aggregates, Balances) {
    let aggregates = compute_aggregates(expenses, participants);
    let balances = aggregates.balances(participants);
    (aggregates, balances)
}
