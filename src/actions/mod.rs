mod actions;
mod report;

pub use actions::Actions;
pub use report::{IndexAge, PurgeSummary};
