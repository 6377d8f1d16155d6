//! Participant model
//!
//! A participant is an opaque name, unique within a trip.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A trip participant, identified by name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    /// Create a participant from a name, trimming surrounding whitespace
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Split a comma-separated list into participants, dropping empty entries
    pub fn parse_list(list: &str) -> Vec<Self> {
        list.split(',')
            .map(Self::new)
            .filter(|p| !p.is_blank())
            .collect()
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Participant {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Participant {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
