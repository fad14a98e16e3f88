//! Timestamp-derived identifiers for players and matches.

use chrono::{DateTime, Utc};

/// Milliseconds since the Unix epoch at `now`, bumped by one until `is_taken` says it is free.
///
/// Two records created within the same millisecond still get distinct ids.
pub fn timestamp_id(now: DateTime<Utc>, is_taken: impl Fn(&str) -> bool) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let candidate = millis.to_string();
        if !is_taken(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}
