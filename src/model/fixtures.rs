// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use super::{attendance::ScheduleRef, AttendanceRecord, Status, Student, Timestamp};

pub(crate) fn student() -> Student {
    Student {
        index_number: "123456".parse().unwrap(),
        first_name: "Anna".to_owned(),
        last_name: "Nowak".to_owned(),
        group_name: Some("INF-2".to_owned()),
    }
}

pub(crate) fn timestamp(value: &str) -> Timestamp {
    Timestamp::try_from(value.to_owned()).unwrap()
}

pub(crate) fn record(status: Status, marked_at: &str) -> AttendanceRecord {
    AttendanceRecord {
        status,
        marked_at: timestamp(marked_at),
        notes: None,
        schedule: ScheduleRef {
            subject: "Databases".to_owned(),
            start_time: timestamp(marked_at),
            end_time: timestamp(marked_at),
            classroom: None,
            instructor: None,
            notes: None,
        },
    }
}
