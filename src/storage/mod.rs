//! Storage layer for the trip splitter
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the read-only [`TripLedger`] port the summary code reads
//! expense snapshots through.

pub mod expenses;
pub mod file_io;
pub mod trips;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use trips::TripRepository;

use crate::config::paths::TripPaths;
use crate::error::{TripError, TripResult};
use crate::models::{Expense, Participant, TripId};

/// Read-only access to a trip's expenses and participants
pub trait TripLedger {
    /// Every expense recorded for a trip
    fn list_expenses(&self, trip_id: TripId) -> TripResult<Vec<Expense>>;

    /// The trip's canonical participant list
    fn list_participants(&self, trip_id: TripId) -> TripResult<Vec<Participant>>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TripPaths,
    pub trips: TripRepository,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TripPaths) -> Result<Self, TripError> {
        paths.ensure_directories()?;

        Ok(Self {
            trips: TripRepository::new(paths.trips_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TripPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TripError> {
        self.trips.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TripError> {
        self.trips.save()?;
        self.expenses.save()?;
        Ok(())
    }
}

impl TripLedger for Storage {
    fn list_expenses(&self, trip_id: TripId) -> TripResult<Vec<Expense>> {
        self.expenses.get_by_trip(trip_id)
    }

    fn list_participants(&self, trip_id: TripId) -> TripResult<Vec<Participant>> {
        self.trips
            .get(trip_id)?
            .map(|trip| trip.participants)
            .ok_or_else(|| TripError::trip_not_found(trip_id.to_string()))
    }
}
