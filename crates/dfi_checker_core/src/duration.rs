//! crates/dfi_checker_core/src/duration.rs
//!
//! Parses the free-form medication duration sent by the client, e.g.
//! `"01/01/2024 - 31/12/2024"`, `"01/01/2024 - Ongoing"`, `"01/01/2024"` or `""`.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

const SEGMENT_SEPARATOR: &str = " - ";
const DATE_FORMAT: &str = "%d/%m/%Y";
const ONGOING: &str = "ongoing";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    #[error("Invalid date '{0}', expected DD/MM/YYYY.")]
    InvalidDate(String),
    #[error("Start date cannot be after end date.")]
    StartAfterEnd,
}

/// A resolved course of medication. An absent end date means "ongoing".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationRange {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

/// Parses `raw` into a start/end pair, defaulting the start to `now`.
///
/// Only the first two `" - "` separated segments are read. A segment that is
/// present but does not match `DD/MM/YYYY` is an error, never a default.
pub fn parse_duration(raw: &str, now: DateTime<Utc>) -> Result<DurationRange, DurationError> {
    let mut segments = raw.split(SEGMENT_SEPARATOR).map(str::trim);

    let start = match segments.next() {
        Some(s) if !s.is_empty() => Some(parse_date(s)?),
        _ => None,
    };
    let end = match segments.next() {
        Some(s) if !s.is_empty() && !s.eq_ignore_ascii_case(ONGOING) => Some(parse_date(s)?),
        _ => None,
    };

    let start = start.unwrap_or(now);
    if let Some(end) = end {
        if start > end {
            return Err(DurationError::StartAfterEnd);
        }
    }

    Ok(DurationRange { start, end })
}

fn parse_date(text: &str) -> Result<DateTime<Utc>, DurationError> {
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| DurationError::InvalidDate(text.to_string()))?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}
