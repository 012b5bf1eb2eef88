//! The on-disk timestamp grammar.
//!
//! All persisted timestamps are RFC 3339 strings in UTC with microsecond
//! precision. Offset timestamps are accepted on input and normalized to UTC.
//! This module is the single place that fixes the grammar; entities never
//! format or parse timestamps themselves.

use crate::Error;
use chrono::{DateTime, SecondsFormat, Utc};

/// Formats a timestamp for persistence.
#[must_use]
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses a persisted timestamp, normalizing any offset to UTC.
pub fn parse(s: &str) -> crate::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| Error::InvalidTimestamp(format!("{s:?}: {e}")))
}
