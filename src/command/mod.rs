// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::{
    api::HttpApi, clock::SystemClock, controller::Controller, error::Result, model::Session,
    storage::Storage, terminal::Terminal,
};

pub(crate) mod details;
pub(crate) mod health;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod shell;
pub(crate) mod show;

pub(crate) type App = Controller<HttpApi, Box<dyn Storage<Session>>, Terminal, SystemClock>;

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, app: &App) -> Result<()>;
}
