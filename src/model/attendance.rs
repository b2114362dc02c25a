// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Attendance status as reported by the service. Statuses this client does
/// not know about are kept verbatim so they survive a round trip through the
/// session cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub(crate) enum Status {
    Present,
    Late,
    Absent,
    Unknown(String),
}

impl Status {
    pub(crate) fn as_str(&self) -> &str {
        match *self {
            Self::Present => "PRESENT",
            Self::Late => "LATE",
            Self::Absent => "ABSENT",
            Self::Unknown(ref other) => other.as_str(),
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PRESENT" => Self::Present,
            "LATE" => Self::Late,
            "ABSENT" => Self::Absent,
            _ => Self::Unknown(value),
        }
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        match value {
            Status::Unknown(other) => other,
            Status::Present | Status::Late | Status::Absent => value.as_str().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScheduleRef {
    pub(crate) subject: String,
    pub(crate) start_time: Timestamp,
    pub(crate) end_time: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) classroom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AttendanceRecord {
    pub(crate) status: Status,
    pub(crate) marked_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) notes: Option<String>,
    pub(crate) schedule: ScheduleRef,
}
