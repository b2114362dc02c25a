// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::error::{self, Result};

use super::App;

/// Log in with your album number and show your attendance. Any earlier login
/// is replaced.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// Your six-digit album number.
    #[clap()]
    album: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &App) -> Result<()> {
        let _ = app.health().await;

        if app.submit(&self.album).await {
            Ok(())
        } else {
            Err(error::Error::Command)
        }
    }
}
