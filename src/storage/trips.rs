//! Trip repository for JSON storage
//!
//! Manages loading and saving trips to trips.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TripError;
use crate::models::{Trip, TripId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable trip data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TripData {
    trips: Vec<Trip>,
}

/// Repository for trip persistence
pub struct TripRepository {
    path: PathBuf,
    data: RwLock<HashMap<TripId, Trip>>,
}

impl TripRepository {
    /// Create a new trip repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load trips from disk
    pub fn load(&self) -> Result<(), TripError> {
        let file_data: TripData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for trip in file_data.trips {
            data.insert(trip.id, trip);
        }

        tracing::debug!(trips = data.len(), path = %self.path.display(), "loaded trips");
        Ok(())
    }

    /// Save trips to disk
    pub fn save(&self) -> Result<(), TripError> {
        let trips = self.get_all()?;
        write_json_atomic(&self.path, &TripData { trips })
    }

    /// Get a trip by ID
    pub fn get(&self, id: TripId) -> Result<Option<Trip>, TripError> {
        let data = self
            .data
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all trips, oldest first
    pub fn get_all(&self) -> Result<Vec<Trip>, TripError> {
        let data = self
            .data
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut trips: Vec<_> = data.values().cloned().collect();
        trips.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        Ok(trips)
    }

    /// Get a trip by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Trip>, TripError> {
        let data = self
            .data
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().find(|t| t.matches_name(name)).cloned())
    }

    /// Insert or update a trip
    pub fn upsert(&self, trip: Trip) -> Result<(), TripError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(trip.id, trip);
        Ok(())
    }

    /// Delete a trip
    pub fn delete(&self, id: TripId) -> Result<bool, TripError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TripError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count trips
    pub fn count(&self) -> Result<usize, TripError> {
        let data = self
            .data
            .read()
            .map_err(|e| TripError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participant;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TripRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TripRepository::new(temp_dir.path().join("trips.json"));
        (temp_dir, repo)
    }

    fn trip(name: &str) -> Trip {
        Trip::new(name, Participant::parse_list("A,B"), vec![])
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let goa = trip("Goa");
        let id = goa.id;
        repo.upsert(goa).unwrap();

        assert_eq!(repo.get(id).unwrap().unwrap().name, "Goa");
        assert_eq!(repo.get_by_name("GOA").unwrap().unwrap().id, id);
        assert!(repo.get_by_name("Manali").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let goa = trip("Goa");
        let id = goa.id;
        repo.upsert(goa).unwrap();
        repo.save().unwrap();

        let repo2 = TripRepository::new(temp_dir.path().join("trips.json"));
        repo2.load().unwrap();
        let loaded = repo2.get(id).unwrap().unwrap();
        assert_eq!(loaded.participants, Participant::parse_list("A,B"));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let goa = trip("Goa");
        let id = goa.id;
        repo.upsert(goa).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
