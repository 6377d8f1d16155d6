//! Expense service
//!
//! Validates incoming expenses against their trip and persists them. This is
//! the ingestion boundary: nothing unvalidated reaches the aggregator.

use chrono::{Local, NaiveDate};

use crate::error::{TripError, TripResult};
use crate::models::{Expense, ExpenseChanges, ExpenseInput, Trip, TripId};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and record a new expense, dated today unless given a date
    pub fn add(&self, trip: &Trip, input: ExpenseInput) -> TripResult<Expense> {
        self.add_on(trip, input, Local::now().date_naive())
    }

    /// Validate and record a new expense, using `today` as the default date
    pub fn add_on(&self, trip: &Trip, input: ExpenseInput, today: NaiveDate) -> TripResult<Expense> {
        let expense = input
            .validate(trip, today)
            .map_err(|e| TripError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        tracing::info!(
            trip = %trip.id,
            expense = %expense.id,
            paid_by = %expense.paid_by,
            amount = %expense.amount,
            "added expense"
        );
        Ok(expense)
    }

    /// List a trip's expenses in chronological order
    pub fn list(&self, trip_id: TripId) -> TripResult<Vec<Expense>> {
        self.storage.expenses.get_by_trip(trip_id)
    }

    /// Find a single expense by full or short ID
    pub fn find(&self, identifier: &str) -> TripResult<Expense> {
        let mut matches = self.storage.expenses.find_matching(identifier)?;
        match matches.len() {
            0 => Err(TripError::expense_not_found(identifier)),
            1 => Ok(matches.remove(0)),
            n => Err(TripError::Validation(format!(
                "'{}' matches {} expenses, use a longer ID",
                identifier, n
            ))),
        }
    }

    /// Apply changes to an existing expense
    pub fn edit(&self, identifier: &str, changes: ExpenseChanges) -> TripResult<Expense> {
        if changes.is_empty() {
            return Err(TripError::Validation("No changes given".into()));
        }

        let mut expense = self.find(identifier)?;
        changes
            .apply(&mut expense)
            .map_err(|e| TripError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        tracing::info!(expense = %expense.id, amount = %expense.amount, "edited expense");
        Ok(expense)
    }

    /// Delete an expense, returning the removed record
    pub fn delete(&self, identifier: &str) -> TripResult<Expense> {
        let expense = self.find(identifier)?;
        self.storage.expenses.delete(expense.id)?;
        self.storage.expenses.save()?;

        tracing::info!(expense = %expense.id, "deleted expense");
        Ok(expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TripPaths;
    use crate::models::{Money, Participant, SplitSelection};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Trip) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let trip = Trip::new("Goa", Participant::parse_list("A,B,C"), vec![]);
        storage.trips.upsert(trip.clone()).unwrap();
        (temp_dir, storage, trip)
    }

    fn input(paid_by: &str, amount: &str) -> ExpenseInput {
        ExpenseInput {
            paid_by: paid_by.into(),
            amount: Some(amount.into()),
            category: Some("Food".into()),
            ..Default::default()
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 10).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let (_temp_dir, storage, trip) = setup();
        let service = ExpenseService::new(&storage);

        let expense = service.add_on(&trip, input("A", "300"), day()).unwrap();
        assert_eq!(expense.date, day());

        let listed = service.list(trip.id).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].amount, Money::from_cents(30000));
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (_temp_dir, storage, trip) = setup();
        let service = ExpenseService::new(&storage);

        assert!(service
            .add_on(&trip, input("A", "abc"), day())
            .unwrap_err()
            .is_validation());
        assert!(service
            .add_on(&trip, input("Z", "10"), day())
            .unwrap_err()
            .is_validation());

        let mut nobody = input("A", "10");
        nobody.split = SplitSelection::Only(vec![]);
        assert!(service.add_on(&trip, nobody, day()).unwrap_err().is_validation());

        assert!(service.list(trip.id).unwrap().is_empty());
    }

    #[test]
    fn test_edit_and_delete() {
        let (_temp_dir, storage, trip) = setup();
        let service = ExpenseService::new(&storage);
        let expense = service.add_on(&trip, input("A", "300"), day()).unwrap();
        let short = expense.id.to_string();

        let edited = service
            .edit(
                &short,
                ExpenseChanges {
                    amount: Some("150".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(edited.amount, Money::from_cents(15000));

        assert!(service
            .edit(&short, ExpenseChanges::default())
            .unwrap_err()
            .is_validation());

        let deleted = service.delete(&short).unwrap();
        assert_eq!(deleted.id, expense.id);
        assert!(service.find(&short).unwrap_err().is_not_found());
    }
}
