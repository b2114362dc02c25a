// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error;

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const SHORT_WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%-d %B %Y, %H:%M";

/// A wall-clock date and time as reported by the attendance service. Values
/// carrying an explicit offset, and epoch milliseconds, are converted to local
/// time on the way in. A bare date means midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "Raw", into = "String")]
pub(crate) struct Timestamp(NaiveDateTime);

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Raw {
    Text(String),
    Millis(i64),
}

impl Timestamp {
    fn from_utc(value: DateTime<Utc>) -> Self {
        Self(value.with_timezone(&Local).naive_local())
    }

    #[cfg(test)]
    pub(crate) const fn new(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// The long, human-readable form used everywhere attendance is shown,
    /// e.g. `16 October 2026, 09:30`.
    pub(crate) fn to_long_string(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }
}

impl TryFrom<String> for Timestamp {
    type Error = error::Conversion;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(&value) {
            return Ok(Self::from_utc(with_offset.with_timezone(&Utc)));
        }

        [WIRE_FORMAT, SHORT_WIRE_FORMAT]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(&value, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(&value, DATE_FORMAT)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(Self)
            .ok_or(error::Conversion::Timestamp(value))
    }
}

impl TryFrom<Raw> for Timestamp {
    type Error = error::Conversion;

    fn try_from(value: Raw) -> Result<Self, Self::Error> {
        match value {
            Raw::Text(text) => Self::try_from(text),
            Raw::Millis(millis) => Utc
                .timestamp_millis_opt(millis)
                .single()
                .map(Self::from_utc)
                .ok_or_else(|| error::Conversion::Timestamp(millis.to_string())),
        }
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.0.format(WIRE_FORMAT).to_string()
    }
}
