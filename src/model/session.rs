// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{AttendanceRecord, Student};

/// The persisted login of the single student using this client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Session {
    pub(crate) student: Student,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub(crate) login_time: DateTime<Utc>,
    pub(crate) attendances: Option<Vec<AttendanceRecord>>,
}

impl Session {
    pub(crate) const fn new(student: Student, login_time: DateTime<Utc>) -> Self {
        Self {
            student,
            login_time,
            attendances: None,
        }
    }

    pub(crate) fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.login_time)
    }

    /// A session is still good when it is exactly `max_age` old.
    pub(crate) fn is_expired(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        self.age(now) > max_age
    }
}
