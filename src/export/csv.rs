//! CSV export functionality
//!
//! Exports a trip's expenses, net balances and settlements to CSV. Amounts are
//! written as plain decimals without a currency symbol.

use serde::Serialize;
use std::io::Write;

use crate::engine::{Aggregates, Balances, Settlement};
use crate::error::TripResult;
use crate::models::Expense;

#[derive(Serialize)]
struct ExpenseRow<'a> {
    id: String,
    date: String,
    paid_by: &'a str,
    amount: String,
    category: &'a str,
    description: &'a str,
    included: String,
}

#[derive(Serialize)]
struct BalanceRow<'a> {
    participant: &'a str,
    spent: String,
    fair_share: String,
    balance: String,
}

#[derive(Serialize)]
struct SettlementRow<'a> {
    from: &'a str,
    to: &'a str,
    amount: String,
}

/// Export expenses to CSV
///
/// The `included` column joins participants with `;` and is empty when the
/// expense is split among everyone.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> TripResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    for expense in expenses {
        let included = expense
            .included
            .as_ref()
            .map(|people| {
                people
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(";")
            })
            .unwrap_or_default();

        csv.serialize(ExpenseRow {
            id: expense.id.as_uuid().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            paid_by: expense.paid_by.as_str(),
            amount: expense.amount.to_string(),
            category: expense.category_name(),
            description: &expense.description,
            included,
        })?;
    }

    if expenses.is_empty() {
        csv.write_record(["id", "date", "paid_by", "amount", "category", "description", "included"])?;
    }

    csv.flush()?;
    Ok(())
}

/// Export per-participant spend, fair share and balance to CSV
pub fn export_balances_csv<W: Write>(
    aggregates: &Aggregates,
    balances: &Balances,
    writer: W,
) -> TripResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    for (participant, balance) in balances.iter() {
        csv.serialize(BalanceRow {
            participant: participant.as_str(),
            spent: aggregates.spent(participant.as_str()).to_string(),
            fair_share: aggregates.fair_share(participant.as_str()).to_string(),
            balance: balance.to_string(),
        })?;
    }

    if balances.is_empty() {
        csv.write_record(["participant", "spent", "fair_share", "balance"])?;
    }

    csv.flush()?;
    Ok(())
}

/// Export settling transfers to CSV
pub fn export_settlements_csv<W: Write>(settlements: &[Settlement], writer: W) -> TripResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    for settlement in settlements {
        csv.serialize(SettlementRow {
            from: settlement.from.as_str(),
            to: settlement.to.as_str(),
            amount: settlement.amount.to_string(),
        })?;
    }

    if settlements.is_empty() {
        csv.write_record(["from", "to", "amount"])?;
    }

    csv.flush()?;
    Ok(())
}
