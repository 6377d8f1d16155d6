//! Configuration module for the trip splitter
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TripPaths;
pub use settings::Settings;
