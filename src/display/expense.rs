//! Expense display formatting
//!
//! Formats expenses for terminal output as a flat register or a day-by-day log.

use crate::engine::DaySummary;
use crate::models::Expense;

use super::report::{format_percentage, percentage, truncate};

fn split_label(expense: &Expense) -> String {
    match &expense.included {
        None => "everyone".to_string(),
        Some(included) if included.is_empty() => "nobody".to_string(),
        Some(included) => included
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let payer_width = expenses
        .iter()
        .map(|e| e.paid_by.as_str().chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<payer_width$}  {:>12}  {:<14}  {:<24}  {}\n",
        "ID",
        "Date",
        "Payer",
        "Amount",
        "Category",
        "Description",
        "Split",
        payer_width = payer_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<payer_width$}  {:->12}  {:-<14}  {:-<24}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        payer_width = payer_width,
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<payer_width$}  {:>12}  {:<14}  {:<24}  {}\n",
            expense.id.to_string(),
            expense.date.format("%Y-%m-%d").to_string(),
            expense.paid_by.as_str(),
            expense.amount.format_with_symbol(symbol),
            truncate(expense.category_name(), 14),
            truncate(&expense.description, 24),
            split_label(expense),
            payer_width = payer_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} expenses\n", expenses.len()));
    output
}

/// Format the day-by-day log with a category breakdown per day
pub fn format_daily_log(days: &[DaySummary], symbol: &str) -> String {
    if days.is_empty() {
        return "No expenses to display yet.".to_string();
    }

    let mut output = String::new();
    for day in days {
        output.push_str(&format!(
            "{}  (total {})\n",
            day.date.format("%Y-%m-%d"),
            day.total.format_with_symbol(symbol)
        ));

        for expense in &day.expenses {
            let description = if expense.description.is_empty() {
                String::new()
            } else {
                format!(" for {}", expense.description)
            };
            output.push_str(&format!(
                "  {} paid {}{} [{}] (split among: {})\n",
                expense.paid_by,
                expense.amount.format_with_symbol(symbol),
                description,
                expense.category_name(),
                split_label(expense)
            ));
        }

        let parts: Vec<String> = day
            .category_spent
            .iter()
            .map(|(category, amount)| {
                format!(
                    "{} {}",
                    category,
                    format_percentage(percentage(*amount, day.total))
                )
            })
            .collect();
        output.push_str(&format!("  by category: {}\n\n", parts.join(", ")));
    }

    output
}
