//! Export module for the trip splitter
//!
//! CSV export of expenses, balances and settlements for spreadsheets.

pub mod csv;

pub use self::csv::{export_balances_csv, export_expenses_csv, export_settlements_csv};
