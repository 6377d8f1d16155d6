//! Balance and settlement engine
//!
//! Pure, synchronous computations over in-memory snapshots of a trip's
//! expenses. Nothing in here touches storage.
//!
//! ```
//! use trip_splitter::engine::{compute_balances, compute_settlements};
//! use trip_splitter::models::{Expense, Money, Participant, TripId};
//! use chrono::NaiveDate;
//!
//! let people: Vec<Participant> = vec!["A".into(), "B".into(), "C".into()];
//! let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
//! let expenses = vec![Expense::new(TripId::new(), "A".into(), Money::from_cents(30000), date)];
//!
//! let (_, balances) = compute_balances(&expenses, &people);
//! let settlements = compute_settlements(&balances);
//! assert_eq!(settlements.len(), 2);
//! ```

pub mod aggregate;
pub mod balances;
pub mod daily;
pub mod settle;

pub use aggregate::{compute_aggregates, compute_balances, Aggregates};
pub use balances::Balances;
pub use daily::{daily_breakdown, DaySummary};
pub use settle::{compute_settlements, Settlement};
