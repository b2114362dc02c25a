// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::error::Result;

use super::App;

/// Show your attendance, picking up where your last login left off.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// Ask the service for your attendance even if a copy is stored locally.
    #[arg(long, short)]
    refresh: bool,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &App) -> Result<()> {
        if self.refresh {
            let _ = app.health().await;
            let _ = app.restore(true).await;
        } else {
            let _ = app.page_load().await;
        }
        Ok(())
    }
}
