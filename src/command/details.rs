// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::error;

use crate::error::{self, Result};

use super::App;

/// Show everything about one attendance record.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The index of the record, as listed by `show`.
    #[clap()]
    index: usize,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &App) -> Result<()> {
        if !app.restore(false).await {
            error!("You need to log in first");
            return Err(error::Error::Command);
        }

        if app.details(self.index).await {
            Ok(())
        } else {
            Err(error::Error::Command)
        }
    }
}
