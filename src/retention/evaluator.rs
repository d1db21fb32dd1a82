use chrono::NaiveDate;

use super::RetentionPolicy;
use crate::models::IndexDescriptor;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Delete(String),
    /// Dry run: the index would have been deleted.
    Report(String),
}

impl Decision {
    pub fn name(&self) -> &str {
        match self {
            Decision::Delete(name) => name,
            Decision::Report(name) => name,
        }
    }
}

pub fn evaluate(
    descriptor: &IndexDescriptor,
    today: NaiveDate,
    policy: &RetentionPolicy,
) -> Option<Decision> {
    if !policy.is_expired(descriptor.age_days(today)) {
        return None;
    }
    let name = descriptor.name.clone();
    if policy.allow_delete {
        Some(Decision::Delete(name))
    } else {
        Some(Decision::Report(name))
    }
}
