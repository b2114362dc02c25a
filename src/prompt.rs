// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use async_trait::async_trait;
use tokio::task;

use crate::{controller::CancelReason, error::Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Answer {
    Confirm,
    Cancel(CancelReason),
}

impl Answer {
    /// `y`/`yes` confirms, a lone Escape (or `esc`) is treated like the
    /// Escape key, anything else declines.
    pub(crate) fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Self::Confirm,
            "\u{1b}" | "esc" => Self::Cancel(CancelReason::Escape),
            _ => Self::Cancel(CancelReason::Explicit),
        }
    }
}

/// Asks the user to confirm logging out.
#[async_trait]
pub(crate) trait Prompt: Send + Sync {
    async fn answer(&self) -> Result<Answer>;
}

pub(crate) struct AssumeYes;

#[async_trait]
impl Prompt for AssumeYes {
    async fn answer(&self) -> Result<Answer> {
        Ok(Answer::Confirm)
    }
}

pub(crate) struct StdinPrompt;

#[async_trait]
impl Prompt for StdinPrompt {
    async fn answer(&self) -> Result<Answer> {
        let line = task::spawn_blocking(|| {
            let mut line = String::new();
            io::stdin().read_line(&mut line).map(|_| line)
        })
        .await??;

        Ok(Answer::parse(&line))
    }
}
