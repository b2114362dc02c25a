// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::error::{self, Result};

use super::App;

/// Check whether the attendance service is reachable.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &App) -> Result<()> {
        if app.health().await {
            println!("The attendance service is up");
            Ok(())
        } else {
            Err(error::Error::Command)
        }
    }
}
