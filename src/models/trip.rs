//! Trip model
//!
//! A trip owns the canonical participant list. Its order is the order balances
//! are reported in and the tie-break order for settlements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ids::TripId;
use super::participant::Participant;

/// A shared trip with a fixed set of participants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier
    pub id: TripId,

    /// Trip name (unique, case-insensitive)
    pub name: String,

    /// Canonical participant list
    pub participants: Vec<Participant>,

    /// Categories offered when adding expenses
    #[serde(default)]
    pub categories: Vec<String>,

    /// When the trip was created
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Create a new trip
    pub fn new(
        name: impl Into<String>,
        participants: Vec<Participant>,
        categories: Vec<String>,
    ) -> Self {
        Self {
            id: TripId::new(),
            name: name.into().trim().to_string(),
            participants,
            categories,
            created_at: Utc::now(),
        }
    }

    /// Whether `name` is one of this trip's participants
    pub fn has_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.as_str() == name)
    }

    /// Normalize a trip name for matching
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Check if this trip matches a name (case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }

    /// Validate the trip
    pub fn validate(&self) -> Result<(), TripValidationError> {
        if self.name.trim().is_empty() {
            return Err(TripValidationError::EmptyName);
        }

        if self.participants.is_empty() {
            return Err(TripValidationError::NoParticipants);
        }

        let mut seen = HashSet::new();
        for participant in &self.participants {
            if participant.is_blank() {
                return Err(TripValidationError::BlankParticipant);
            }
            if !seen.insert(participant.as_str()) {
                return Err(TripValidationError::DuplicateParticipant(
                    participant.to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for trips
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripValidationError {
    EmptyName,
    NoParticipants,
    BlankParticipant,
    DuplicateParticipant(String),
}

impl fmt::Display for TripValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Trip name cannot be empty"),
            Self::NoParticipants => write!(f, "A trip needs at least one participant"),
            Self::BlankParticipant => write!(f, "Participant names cannot be blank"),
            Self::DuplicateParticipant(name) => {
                write!(f, "Participant '{}' is listed more than once", name)
            }
        }
    }
}

impl std::error::Error for TripValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(names: &[&str]) -> Vec<Participant> {
        names.iter().map(|n| Participant::new(n)).collect()
    }

    #[test]
    fn test_new_trip() {
        let trip = Trip::new("  Mulki Surf Trip ", people(&["CR", "DOG"]), vec![]);
        assert_eq!(trip.name, "Mulki Surf Trip");
        assert!(trip.has_participant("CR"));
        assert!(!trip.has_participant("cr"));
        assert!(trip.validate().is_ok());
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let trip = Trip::new("Goa", people(&["A"]), vec![]);
        assert!(trip.matches_name(" goa "));
        assert!(!trip.matches_name("Goa 2"));
    }

    #[test]
    fn test_validation() {
        let trip = Trip::new("", people(&["A"]), vec![]);
        assert_eq!(trip.validate(), Err(TripValidationError::EmptyName));

        let trip = Trip::new("Goa", vec![], vec![]);
        assert_eq!(trip.validate(), Err(TripValidationError::NoParticipants));

        let trip = Trip::new("Goa", people(&["A", "B", "A"]), vec![]);
        assert_eq!(
            trip.validate(),
            Err(TripValidationError::DuplicateParticipant("A".into()))
        );
    }
}
