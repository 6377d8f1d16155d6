//! Trip summary formatting: totals, category breakdown, net balances and
//! settlements

use crate::engine::{Aggregates, Balances, Settlement};

use super::report::{format_bar, format_percentage, format_signed, percentage, separator};

const BAR_WIDTH: usize = 20;

/// Format the total spent and the category breakdown
pub fn format_totals(aggregates: &Aggregates, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total spent: {}  ({} expenses)\n",
        aggregates.total.format_with_symbol(symbol),
        aggregates.expense_count
    ));

    if aggregates.category_spent.is_empty() {
        return output;
    }

    let mut categories: Vec<_> = aggregates.category_spent.iter().collect();
    categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let name_width = categories
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);
    let max = categories
        .first()
        .map(|(_, amount)| amount.as_f64())
        .unwrap_or(0.0);

    output.push_str("\nBy category\n");
    output.push_str(&separator(name_width + BAR_WIDTH + 24));
    output.push('\n');
    for (category, amount) in categories {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>5}  {}\n",
            category,
            amount.format_with_symbol(symbol),
            format_percentage(percentage(*amount, aggregates.total)),
            format_bar(amount.as_f64(), max, BAR_WIDTH),
            name_width = name_width,
        ));
    }

    output
}

/// Format net balances, one line per participant
pub fn format_balances(aggregates: &Aggregates, balances: &Balances, symbol: &str) -> String {
    if balances.is_empty() {
        return "No participants.".to_string();
    }

    let name_width = balances
        .iter()
        .map(|(p, _)| p.as_str().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>13}  {}\n",
        "Name",
        "Paid",
        "Fair share",
        "Balance",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:->13}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (participant, balance) in balances.iter() {
        let status = if balance.is_positive() {
            "gets back"
        } else if balance.is_negative() {
            "owes"
        } else {
            "settled"
        };
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>12}  {:>13}  {}\n",
            participant.as_str(),
            aggregates.spent(participant.as_str()).format_with_symbol(symbol),
            aggregates
                .fair_share(participant.as_str())
                .format_with_symbol(symbol),
            format_signed(balance, symbol),
            status,
            name_width = name_width,
        ));
    }

    output
}

/// Format the list of settling transfers
pub fn format_settlements(settlements: &[Settlement], symbol: &str) -> String {
    if settlements.is_empty() {
        return "Everyone is settled. No dues pending!\n".to_string();
    }

    let mut output = String::new();
    for settlement in settlements {
        output.push_str(&format!(
            "{} owes {} {}\n",
            settlement.from,
            settlement.to,
            settlement.amount.format_with_symbol(symbol)
        ));
    }
    output
}
