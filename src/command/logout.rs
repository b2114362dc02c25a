// SPDX-FileCopyrightText: 2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::info;

use crate::{
    error::Result,
    prompt::{Answer, AssumeYes, Prompt, StdinPrompt},
};

use super::App;

/// Forget the stored login.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// Do not ask for confirmation.
    #[arg(long, short)]
    yes: bool,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, app: &App) -> Result<()> {
        if !app.restore(false).await {
            info!("Nobody is logged in");
            return Ok(());
        }

        let _ = app.request_logout().await;
        let prompt: Box<dyn Prompt> = if self.yes {
            Box::new(AssumeYes)
        } else {
            Box::new(StdinPrompt)
        };

        let _ = match prompt.answer().await? {
            Answer::Confirm => app.confirm_logout().await,
            Answer::Cancel(reason) => app.cancel_logout(reason).await,
        };
        Ok(())
    }
}
