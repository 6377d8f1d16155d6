//! Business logic layer
//!
//! Services sit between the CLI and storage: they validate input, persist
//! changes and feed stored snapshots into the engine.

pub mod expense;
pub mod summary;
pub mod trip;

pub use expense::ExpenseService;
pub use summary::{SummaryService, TripSummary};
pub use trip::TripService;
