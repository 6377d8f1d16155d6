//! Trip Splitter - split shared trip expenses and settle up
//!
//! Records who paid for what on a group trip, aggregates spending per
//! participant and category, and computes a short list of transfers that
//! brings every balance back to zero.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (trips, expenses, participants, money)
//! - `engine`: Pure aggregation, balance and settlement computations
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use trip_splitter::config::{paths::TripPaths, settings::Settings};
//!
//! let paths = TripPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TripError;
