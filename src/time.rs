//! Helpers for unix timestamps.

use chrono::{DateTime, Utc};

/// A unix timestamp in seconds, as used by the `from_date` and `current_date` fields.
pub type Timestamp = i64;

/// Gets the current time as a [`Timestamp`].
pub fn timestamp_now() -> Timestamp {
    Utc::now().timestamp()
}

/// Converts a [`Timestamp`] into a date, if it is in range.
pub fn timestamp_to_date(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0)
}
