//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json. Expenses of every
//! trip share one file and are indexed by trip on load.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TripError;
use crate::models::{Expense, ExpenseId, TripId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
///
/// Stored rows that fail validation are held aside: they never reach readers
/// but are written back untouched on save.
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
    /// Index: trip_id -> expense ids
    by_trip: RwLock<HashMap<TripId, Vec<ExpenseId>>>,
    skipped: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_trip: RwLock::new(HashMap::new()),
            skipped: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), TripError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_trip = self
            .by_trip
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut skipped = self
            .skipped
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_trip.clear();
        skipped.clear();

        for expense in file_data.expenses {
            if let Err(e) = expense.validate() {
                tracing::warn!(expense = %expense.id, error = %e, "skipping invalid stored expense");
                skipped.push(expense);
                continue;
            }
            by_trip.entry(expense.trip_id).or_default().push(expense.id);
            data.insert(expense.id, expense);
        }

        tracing::debug!(
            expenses = data.len(),
            skipped = skipped.len(),
            path = %self.path.display(),
            "loaded expenses"
        );
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), TripError> {
        let data = self
            .data
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let skipped = self
            .skipped
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().chain(skipped.iter()).cloned().collect();
        sort_chronologically(&mut expenses);

        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, TripError> {
        let data = self
            .data
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all expenses of a trip, ordered by date then creation time
    pub fn get_by_trip(&self, trip_id: TripId) -> Result<Vec<Expense>, TripError> {
        let data = self
            .data
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_trip = self
            .by_trip
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<Expense> = by_trip
            .get(&trip_id)
            .map(|ids| ids.iter().filter_map(|id| data.get(id).cloned()).collect())
            .unwrap_or_default();
        sort_chronologically(&mut expenses);
        Ok(expenses)
    }

    /// Find expenses whose ID matches a user-supplied identifier
    pub fn find_matching(&self, identifier: &str) -> Result<Vec<Expense>, TripError> {
        let data = self
            .data
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .filter(|e| e.id.matches(identifier))
            .cloned()
            .collect())
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), TripError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_trip = self
            .by_trip
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(old) = data.get(&expense.id) {
            if old.trip_id != expense.trip_id {
                if let Some(ids) = by_trip.get_mut(&old.trip_id) {
                    ids.retain(|id| *id != expense.id);
                }
            }
        }

        let ids = by_trip.entry(expense.trip_id).or_default();
        if !ids.contains(&expense.id) {
            ids.push(expense.id);
        }

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> Result<bool, TripError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_trip = self
            .by_trip
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(expense) = data.remove(&id) {
            if let Some(ids) = by_trip.get_mut(&expense.trip_id) {
                ids.retain(|other| *other != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Delete every expense of a trip, returning how many valid ones were removed
    ///
    /// Invalid stored rows of the trip are dropped with it.
    pub fn delete_by_trip(&self, trip_id: TripId) -> Result<usize, TripError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_trip = self
            .by_trip
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut skipped = self
            .skipped
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        skipped.retain(|expense| expense.trip_id != trip_id);
        let ids = by_trip.remove(&trip_id).unwrap_or_default();
        Ok(ids.iter().filter(|id| data.remove(*id).is_some()).count())
    }

    /// Number of stored rows held aside as invalid
    pub fn skipped_count(&self) -> Result<usize, TripError> {
        let skipped = self
            .skipped
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(skipped.len())
    }

    /// Count valid expenses across all trips
    pub fn count(&self) -> Result<usize, TripError> {
        let data = self
            .data
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

fn sort_chronologically(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
}
