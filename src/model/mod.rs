// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

pub(crate) mod attendance;
#[cfg(test)]
pub(crate) mod fixtures;
pub(crate) mod session;
pub(crate) mod student;
pub(crate) mod timestamp;

pub(crate) use attendance::{AttendanceRecord, Status};
pub(crate) use session::Session;
pub(crate) use student::{IndexNumber, Student};
pub(crate) use timestamp::Timestamp;
