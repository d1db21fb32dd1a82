use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::warn;

use super::InvalidDateError;
use crate::models::IndexDescriptor;

static LOG_INDEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:filebeat|logstash)-([0-9]{4})\.([0-9]{2})\.([0-9]{2})$").unwrap()
});

/// Lazily picks the dated log indices out of `index_names`, in input order.
///
/// The whole name must match, so `logstash-2023.01.01-restored` is skipped like any other
/// foreign name, with a warning. A name that has the right shape but no real date behind
/// it (say `filebeat-2023.13.01`) comes out as an error.
pub fn classify<I>(index_names: I) -> Classified<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Classified {
        names: index_names.into_iter(),
    }
}

pub struct Classified<I> {
    names: I,
}

impl<I> Iterator for Classified<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<IndexDescriptor, InvalidDateError>;

    fn next(&mut self) -> Option<Self::Item> {
        for name in self.names.by_ref() {
            let name = name.as_ref();
            match classify_one(name) {
                Some(result) => return Some(result),
                None => warn!("Index {} does not look like a log index, skipping", name),
            }
        }
        None
    }
}

pub fn classify_one(name: &str) -> Option<Result<IndexDescriptor, InvalidDateError>> {
    let captures = LOG_INDEX.captures(name)?;
    // The pattern only admits ASCII digits of fixed width, so these cannot overflow.
    let year: i32 = captures[1].parse().ok()?;
    let month: u32 = captures[2].parse().ok()?;
    let day: u32 = captures[3].parse().ok()?;

    let descriptor = NaiveDate::from_ymd_opt(year, month, day)
        .map(|timestamp| IndexDescriptor::new(name, timestamp))
        .ok_or_else(|| InvalidDateError {
            index: name.to_string(),
            year,
            month,
            day,
        });
    Some(descriptor)
}
