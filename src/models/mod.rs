//! Core data models for the trip splitter
//!
//! This module contains the data structures of the expense-sharing domain:
//! trips, participants, expenses and money amounts.

pub mod expense;
pub mod ids;
pub mod money;
pub mod participant;
pub mod trip;

pub use expense::{
    Expense, ExpenseChanges, ExpenseInput, ExpenseValidationError, SplitSelection, MAX_AMOUNT,
    UNCATEGORIZED,
};
pub use ids::{ExpenseId, TripId};
pub use money::{Money, MoneyParseError};
pub use participant::Participant;
pub use trip::{Trip, TripValidationError};
