//! Display formatting for terminal output
//!
//! Provides utilities for formatting trips, expenses and computed summaries
//! for terminal display.

pub mod expense;
pub mod report;
pub mod summary;
pub mod trip;

pub use expense::{format_daily_log, format_expense_list};
pub use summary::{format_balances, format_settlements, format_totals};
pub use trip::{format_trip_details, format_trip_list};
