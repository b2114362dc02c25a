// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write as _};

use async_trait::async_trait;
use clap::Parser;
use tokio::io::{AsyncBufReadExt as _, BufReader};

use crate::{
    controller::{CancelReason, ClickTarget, Key},
    error::Result,
};

use super::App;

const HELP: &str = "\
type <text>     type into the album number field
login [album]   log in with album, or with what was typed
logout          ask to log out
yes | no        answer the logout question
esc             press Escape
inside          click inside the logout dialog
outside         click outside the logout dialog
refresh         fetch attendance again
details <n>     show record number n
quit            leave";

/// Run an interactive session.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Empty,
    Type(&'a str),
    Login(&'a str),
    Logout,
    Yes,
    No,
    Escape,
    Inside,
    Outside,
    Refresh,
    Details(Option<usize>),
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Line<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "type" => Self::Type(rest),
            "login" => Self::Login(rest),
            "logout" => Self::Logout,
            "y" | "yes" => Self::Yes,
            "n" | "no" => Self::No,
            "esc" | "\u{1b}" => Self::Escape,
            "inside" => Self::Inside,
            "outside" => Self::Outside,
            "refresh" => Self::Refresh,
            "details" => Self::Details(rest.parse().ok()),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(word),
        }
    }
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &App) -> Result<()> {
        let _ = app.page_load().await;
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut field = String::new();

        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            app.tick().await;

            let _ = match Line::parse(&line) {
                Line::Empty => continue,
                Line::Type(raw) => {
                    field = app.input(raw).await;
                    println!("Album number: {field}");
                    true
                }
                Line::Login("") => app.submit(&field).await,
                Line::Login(raw) => app.submit(raw).await,
                Line::Logout => {
                    let requested = app.request_logout().await;
                    if !requested {
                        eprintln!("You are not logged in.");
                    }
                    requested
                }
                Line::Yes => app.confirm_logout().await,
                Line::No => app.cancel_logout(CancelReason::Explicit).await,
                Line::Escape => app.key(Key::Escape).await,
                Line::Inside => app.click(ClickTarget::Dialog).await,
                Line::Outside => app.click(ClickTarget::Backdrop).await,
                Line::Refresh => app.refresh().await,
                Line::Details(Some(n)) => app.details(n).await,
                Line::Details(None) => {
                    eprintln!("Which record? Try `details 0`.");
                    false
                }
                Line::Help => {
                    println!("{HELP}");
                    true
                }
                Line::Quit => break,
                Line::Unknown(word) => {
                    eprintln!("Unknown command {word}; type `help` for a list.");
                    false
                }
            };
        }

        Ok(())
    }
}
