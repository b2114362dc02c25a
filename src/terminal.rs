// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use tabled::{
    settings::{object::Cell, Format, Modify, Style},
    Table,
};

use crate::{
    model::Student,
    render::{Details, Summary},
    view::{Banner, BannerKind, Greeting, InputState, View},
};

/// Draws the client as plain text on standard output.
pub(crate) struct Terminal;

fn group_line(student: &Student) -> String {
    student.group_name.as_ref().map_or_else(
        || " (no group assigned)".to_owned(),
        |group| format!(", Group: {group}"),
    )
}

impl View for Terminal {
    fn show_login(&self) {
        println!("Log in with your album number to see your attendance.");
    }

    fn show_dashboard(&self, student: &Student, greeting: Greeting) {
        let (hello, status) = match greeting {
            Greeting::Welcome => ("Welcome", "Logged in successfully"),
            Greeting::Restored => ("Welcome back", "Session restored"),
        };
        println!("{hello}, {}!", student.full_name());
        println!(
            "{status}. Album: {}{}",
            student.index_number,
            group_line(student)
        );
        println!();
    }

    fn show_attendances(&self, summary: &Summary) {
        println!("{}", Table::new([summary.stats]).with(Style::rounded()));

        if summary.is_empty() {
            println!("No attendance recorded yet.");
            println!("Your attendance will show up here after your first classes.");
            return;
        }

        println!(
            "{}",
            Table::new((0_u32..).zip(summary.cards.iter()))
                .with(Style::rounded())
                .with(Modify::new(Cell::new(0, 0)).with(Format::content(|_| "Index".to_owned())))
        );
    }

    fn show_details(&self, details: &Details) {
        println!("{details}");
    }

    fn show_banner(&self, banner: &Banner) {
        match banner.kind {
            BannerKind::Error => eprintln!("Error: {}", banner.text),
            BannerKind::Success => println!("{}", banner.text),
        }
    }

    // Printed text cannot be taken back.
    fn hide_banner(&self) {}

    fn set_busy(&self, busy: bool) {
        if busy {
            eprintln!("Checking...");
        }
    }

    fn set_input_state(&self, _state: InputState) {}

    fn set_logout_dialog(&self, open: bool) {
        if open {
            println!("Do you really want to log out? [y/N]");
        }
    }
}
