//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod report;
pub mod trip;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_report_command, ExportKind, ReportCommands};
pub use trip::{handle_trip_command, TripCommands};
