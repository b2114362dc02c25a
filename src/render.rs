// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use tabled::Tabled;

use crate::model::{AttendanceRecord, Status};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Tabled)]
pub(crate) struct Stats {
    #[tabled(rename = "Total")]
    pub(crate) total: usize,
    #[tabled(rename = "Present")]
    pub(crate) present: usize,
    #[tabled(rename = "Late")]
    pub(crate) late: usize,
    #[tabled(rename = "Absent")]
    pub(crate) absent: usize,
}

/// Counts records by status. Records with a status we do not recognize only
/// count towards the total.
pub(crate) fn compute_stats(records: &[AttendanceRecord]) -> Stats {
    records.iter().fold(
        Stats {
            total: records.len(),
            ..Stats::default()
        },
        |mut stats, record| {
            match record.status {
                Status::Present => stats.present += 1,
                Status::Late => stats.late += 1,
                Status::Absent => stats.absent += 1,
                Status::Unknown(_) => {}
            }
            stats
        },
    )
}

/// Most recent first. Records marked at the same instant come out in no
/// particular order.
pub(crate) fn ordered(mut records: Vec<AttendanceRecord>) -> Vec<AttendanceRecord> {
    records.sort_unstable_by(|a, b| b.marked_at.cmp(&a.marked_at));
    records
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StatusInfo {
    pub(crate) label: &'static str,
    pub(crate) class: &'static str,
}

/// The plain-text stand-in for a style class.
fn marker(class: &str) -> char {
    match class {
        "status-present" => '+',
        "status-late" => '~',
        _ => '-',
    }
}

pub(crate) fn status_info(status: &Status) -> StatusInfo {
    match *status {
        Status::Present => StatusInfo {
            label: "Present",
            class: "status-present",
        },
        Status::Late => StatusInfo {
            label: "Late",
            class: "status-late",
        },
        Status::Absent => StatusInfo {
            label: "Absent",
            class: "status-absent",
        },
        Status::Unknown(_) => StatusInfo {
            label: "Unknown",
            class: "status-absent",
        },
    }
}

/// The display-ready form of one attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub(crate) struct Card {
    #[tabled(rename = "Subject")]
    pub(crate) subject: String,
    #[tabled(rename = "Status", display_with("Self::format_status", self))]
    pub(crate) status: StatusInfo,
    #[tabled(rename = "Date")]
    pub(crate) date: String,
    #[tabled(rename = "Classroom", display_with = "format_optional")]
    pub(crate) classroom: Option<String>,
    #[tabled(rename = "Instructor", display_with = "format_optional")]
    pub(crate) instructor: Option<String>,
    #[tabled(rename = "Marked")]
    pub(crate) marked: String,
    #[tabled(rename = "Notes", display_with = "format_optional")]
    pub(crate) notes: Option<String>,
    #[tabled(skip)]
    pub(crate) schedule_notes: Option<String>,
}

impl Card {
    fn format_status(&self) -> String {
        format!("{} {}", marker(self.status.class), self.status.label)
    }
}

fn format_optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub(crate) fn presentation(record: &AttendanceRecord) -> Card {
    Card {
        subject: record.schedule.subject.clone(),
        status: status_info(&record.status),
        date: record.schedule.start_time.to_long_string(),
        classroom: record.schedule.classroom.clone(),
        instructor: record.schedule.instructor.clone(),
        marked: record.marked_at.to_long_string(),
        notes: record.notes.clone(),
        schedule_notes: record.schedule.notes.clone(),
    }
}

/// Everything needed to draw the attendance section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) stats: Stats,
    pub(crate) records: Vec<AttendanceRecord>,
    pub(crate) cards: Vec<Card>,
}

impl Summary {
    pub(crate) fn new(records: Vec<AttendanceRecord>) -> Self {
        let stats = compute_stats(&records);
        let records = ordered(records);
        let cards = records.iter().map(presentation).collect();
        Self {
            stats,
            records,
            cards,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The full description of a single record, shown on request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Details {
    card: Card,
    ends: String,
}

impl From<&AttendanceRecord> for Details {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            card: presentation(record),
            ends: record.schedule.end_time.to_long_string(),
        }
    }
}

impl fmt::Display for Details {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = &self.card;
        writeln!(f, "ATTENDANCE DETAILS")?;
        writeln!(f)?;
        writeln!(f, "Subject: {}", card.subject)?;
        writeln!(f, "Date: {}", card.date)?;
        writeln!(f, "Status: {}", card.status.label)?;
        if let Some(ref classroom) = card.classroom {
            writeln!(f, "Classroom: {classroom}")?;
        }
        if let Some(ref instructor) = card.instructor {
            writeln!(f, "Instructor: {instructor}")?;
        }
        writeln!(f)?;
        writeln!(f, "Duration: {} - {}", card.date, self.ends)?;
        write!(f, "Marked: {}", card.marked)?;
        if card.notes.is_some() || card.schedule_notes.is_some() {
            writeln!(f)?;
        }
        if let Some(ref notes) = card.notes {
            write!(f, "\nNotes: {notes}")?;
        }
        if let Some(ref notes) = card.schedule_notes {
            write!(f, "\nInformation: {notes}")?;
        }
        Ok(())
    }
}
