//! Expense CLI commands
//!
//! Implements CLI commands for recording and correcting expenses.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_daily_log, format_expense_list};
use crate::engine::daily_breakdown;
use crate::error::{TripError, TripResult};
use crate::models::{ExpenseChanges, ExpenseInput, Participant, SplitSelection};
use crate::services::{ExpenseService, TripService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Trip name or ID
        trip: String,
        /// Who paid
        paid_by: String,
        /// Amount paid (e.g., "450" or "450.50")
        amount: String,
        /// Category
        #[arg(short, long)]
        category: Option<String>,
        /// Description
        #[arg(short, long)]
        description: Option<String>,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Participants to leave out of the split (comma-separated)
        #[arg(short, long, value_delimiter = ',', conflicts_with = "only")]
        exclude: Vec<String>,
        /// Split only among these participants (comma-separated)
        #[arg(short, long, value_delimiter = ',', conflicts_with = "exclude")]
        only: Vec<String>,
    },
    /// List a trip's expenses
    List {
        /// Trip name or ID
        trip: String,
        /// Group by day with a per-day category breakdown
        #[arg(long)]
        by_day: bool,
    },
    /// Change an existing expense
    Edit {
        /// Expense ID (full or short form, e.g. exp-1a2b3c4d)
        expense: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID (full or short form)
        expense: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TripResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            trip,
            paid_by,
            amount,
            category,
            description,
            date,
            exclude,
            only,
        } => {
            let trip = TripService::new(storage).require(&trip)?;

            let split = if !only.is_empty() {
                SplitSelection::Only(to_participants(&only))
            } else if !exclude.is_empty() {
                SplitSelection::Exclude(to_participants(&exclude))
            } else {
                SplitSelection::Everyone
            };

            let input = ExpenseInput {
                paid_by,
                amount: Some(amount),
                description,
                category,
                split,
                date: date.as_deref().map(parse_date).transpose()?,
            };

            let expense = service.add(&trip, input)?;
            println!(
                "Added {} by {} under {} ({})",
                expense.amount.format_with_symbol(symbol),
                expense.paid_by,
                expense.category_name(),
                expense.id
            );
        }

        ExpenseCommands::List { trip, by_day } => {
            let trip = TripService::new(storage).require(&trip)?;
            let expenses = service.list(trip.id)?;

            if by_day {
                print!("{}", format_daily_log(&daily_breakdown(&expenses), symbol));
            } else {
                print!("{}", format_expense_list(&expenses, symbol));
            }
        }

        ExpenseCommands::Edit {
            expense,
            amount,
            category,
            description,
            date,
        } => {
            let changes = ExpenseChanges {
                amount,
                description,
                category,
                date: date.as_deref().map(parse_date).transpose()?,
            };

            let updated = service.edit(&expense, changes)?;
            println!("Updated expense {}: {}", updated.id, updated);
        }

        ExpenseCommands::Delete { expense, force } => {
            let found = service.find(&expense)?;

            if !force {
                println!("About to delete expense: {}", found);
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(&found.id.as_uuid().to_string())?;
            println!("Deleted expense {}", deleted.id);
        }
    }

    Ok(())
}

fn to_participants(names: &[String]) -> Vec<Participant> {
    names
        .iter()
        .map(Participant::new)
        .filter(|p| !p.is_blank())
        .collect()
}

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> TripResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TripError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
        );
        assert!(parse_date("31/01/2026").unwrap_err().is_validation());
    }

    #[test]
    fn test_to_participants_drops_blanks() {
        let names = vec!["A".to_string(), " ".to_string(), " B ".to_string()];
        let people = to_participants(&names);
        assert_eq!(people, Participant::parse_list("A,B"));
    }
}
