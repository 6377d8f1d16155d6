//! Trip service
//!
//! Business logic for creating, finding and removing trips.

use std::collections::BTreeSet;

use crate::error::{TripError, TripResult};
use crate::models::{Participant, Trip};
use crate::storage::Storage;

/// Service for trip management
pub struct TripService<'a> {
    storage: &'a Storage,
}

impl<'a> TripService<'a> {
    /// Create a new trip service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new trip
    ///
    /// `categories` should already contain the configured defaults when the
    /// user supplied none.
    pub fn create(
        &self,
        name: &str,
        participants: Vec<Participant>,
        categories: Vec<String>,
    ) -> TripResult<Trip> {
        let name = name.trim();
        if self.storage.trips.get_by_name(name)?.is_some() {
            return Err(TripError::Duplicate {
                entity_type: "Trip",
                identifier: name.to_string(),
            });
        }

        let categories = categories
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        let trip = Trip::new(name, participants, categories);
        trip.validate()
            .map_err(|e| TripError::Validation(e.to_string()))?;

        self.storage.trips.upsert(trip.clone())?;
        self.storage.trips.save()?;

        tracing::info!(trip = %trip.id, name = %trip.name, participants = trip.participants.len(), "created trip");
        Ok(trip)
    }

    /// List all trips
    pub fn list(&self) -> TripResult<Vec<Trip>> {
        self.storage.trips.get_all()
    }

    /// Find a trip by name or ID
    pub fn find(&self, identifier: &str) -> TripResult<Option<Trip>> {
        if let Some(trip) = self.storage.trips.get_by_name(identifier)? {
            return Ok(Some(trip));
        }

        Ok(self
            .storage
            .trips
            .get_all()?
            .into_iter()
            .find(|t| t.id.matches(identifier)))
    }

    /// Find a trip by name or ID, failing if it does not exist
    pub fn require(&self, identifier: &str) -> TripResult<Trip> {
        self.find(identifier)?
            .ok_or_else(|| TripError::trip_not_found(identifier))
    }

    /// Delete a trip together with its expenses
    ///
    /// Returns the number of expenses removed.
    pub fn delete(&self, trip: &Trip) -> TripResult<usize> {
        if !self.storage.trips.delete(trip.id)? {
            return Err(TripError::trip_not_found(trip.name.clone()));
        }
        let removed = self.storage.expenses.delete_by_trip(trip.id)?;

        self.storage.save_all()?;

        tracing::info!(trip = %trip.id, name = %trip.name, expenses = removed, "deleted trip");
        Ok(removed)
    }

    /// The trip's own categories plus any used by its expenses, sorted
    pub fn known_categories(&self, trip: &Trip) -> TripResult<Vec<String>> {
        let mut categories: BTreeSet<String> = trip.categories.iter().cloned().collect();
        for expense in self.storage.expenses.get_by_trip(trip.id)? {
            if let Some(category) = expense.category {
                categories.insert(category);
            }
        }
        Ok(categories.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TripPaths;
    use crate::models::{Expense, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn food() -> Vec<String> {
        vec!["Food".into(), " ".into()]
    }

    #[test]
    fn test_create_trip() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TripService::new(&storage);

        let trip = service
            .create("Mulki Surf Trip", Participant::parse_list("CR, PALLE, DOG"), food())
            .unwrap();

        assert_eq!(trip.participants.len(), 3);
        assert_eq!(trip.categories, vec!["Food".to_string()]);
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_create_rejects_duplicates_and_invalid() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TripService::new(&storage);

        service
            .create("Goa", Participant::parse_list("A"), vec![])
            .unwrap();

        let dup = service.create("goa", Participant::parse_list("B"), vec![]);
        assert!(matches!(dup, Err(TripError::Duplicate { .. })));

        let empty = service.create("Manali", vec![], vec![]);
        assert!(empty.unwrap_err().is_validation());

        let repeated = service.create("Ooty", Participant::parse_list("A,A"), vec![]);
        assert!(repeated.unwrap_err().is_validation());
    }

    #[test]
    fn test_find_by_name_or_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TripService::new(&storage);
        let trip = service
            .create("Goa", Participant::parse_list("A"), vec![])
            .unwrap();

        assert_eq!(service.require("GOA").unwrap().id, trip.id);
        assert_eq!(service.require(&trip.id.to_string()).unwrap().id, trip.id);
        assert!(service.require("nowhere").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_removes_expenses() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TripService::new(&storage);
        let trip = service
            .create("Goa", Participant::parse_list("A"), vec![])
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        storage
            .expenses
            .upsert(Expense::new(trip.id, "A".into(), Money::from_cents(100), date))
            .unwrap();

        assert_eq!(service.delete(&trip).unwrap(), 1);
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert!(service.find("Goa").unwrap().is_none());
    }

    #[test]
    fn test_known_categories_merge() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TripService::new(&storage);
        let trip = service
            .create("Goa", Participant::parse_list("A"), vec!["Stay".into(), "Food".into()])
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        storage
            .expenses
            .upsert(
                Expense::new(trip.id, "A".into(), Money::from_cents(100), date)
                    .with_category("Ice Cream"),
            )
            .unwrap();

        assert_eq!(
            service.known_categories(&trip).unwrap(),
            vec!["Food", "Ice Cream", "Stay"]
        );
    }
}
