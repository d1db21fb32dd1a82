//! Deciding which log indices have outlived their retention.
//!
//! [`classify`] turns raw index names into dated [`IndexDescriptor`]s and [`evaluate`]
//! decides, one descriptor at a time, whether the index should go.
//!
//! [`IndexDescriptor`]: crate::models::IndexDescriptor

mod classifier;
mod error;
mod evaluator;
mod policy;

pub use classifier::{classify, classify_one, Classified};
pub use error::InvalidDateError;
pub use evaluator::{evaluate, Decision};
pub use policy::{RetentionPolicy, DEFAULT_MAX_AGE_DAYS};
