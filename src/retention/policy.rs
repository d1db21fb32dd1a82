use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_AGE_DAYS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RetentionPolicy {
    pub max_age_days: u32,
    pub allow_delete: bool,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            allow_delete: false,
        }
    }
}

impl RetentionPolicy {
    pub fn new(max_age_days: u32, allow_delete: bool) -> RetentionPolicy {
        RetentionPolicy {
            max_age_days,
            allow_delete,
        }
    }

    pub fn is_expired(&self, age_days: i64) -> bool {
        age_days > i64::from(self.max_age_days)
    }
}
