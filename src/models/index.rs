use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A log index recognised by name, with the date embedded in that name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndexDescriptor {
    pub name: String,
    pub timestamp: NaiveDate,
}

impl IndexDescriptor {
    pub fn new(name: impl Into<String>, timestamp: NaiveDate) -> IndexDescriptor {
        IndexDescriptor {
            name: name.into(),
            timestamp,
        }
    }

    /// Negative for future-dated indices.
    pub fn age_days(&self, today: NaiveDate) -> i64 {
        (today - self.timestamp).num_days()
    }
}

impl Display for IndexDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.timestamp)
    }
}
