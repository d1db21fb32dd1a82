use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("index {index} carries an invalid date {year:04}.{month:02}.{day:02}")]
pub struct InvalidDateError {
    pub index: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}
