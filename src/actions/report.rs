use std::fmt::Display;

use serde::Serialize;

use crate::models::IndexDescriptor;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PurgeSummary {
    pub examined: usize,
    pub matched: usize,
    pub retained: usize,
    pub deleted: Vec<String>,
    /// Expired indices left in place because deletion is disabled.
    pub reported: Vec<String>,
}

impl Display for PurgeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "examined {} indices, {} log indices, {} retained, {} deleted, {} would be deleted",
            self.examined,
            self.matched,
            self.retained,
            self.deleted.len(),
            self.reported.len()
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndexAge {
    pub descriptor: IndexDescriptor,
    pub age_days: i64,
    pub expired: bool,
}

impl Display for IndexAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.expired { "expired" } else { "retained" };
        write!(
            f,
            "{}\t{}\t{} days\t{}",
            self.descriptor.name, self.descriptor.timestamp, self.age_days, verdict
        )
    }
}
