// SPDX-FileCopyrightText: 2022-2024 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]
#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    missing_doc_code_examples,
    private_doc_tests,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::unseparated_literal_suffix,
    clippy::decimal_literal_representation,
    clippy::single_char_lifetime_names,
    clippy::fallible_impl_from,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_enum_match_arm,
    clippy::deref_by_slicing,
    clippy::default_numeric_fallback,
    clippy::shadow_reuse,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::string_add,
    clippy::use_debug,
    clippy::future_not_send
)]
#![cfg_attr(not(test), warn(clippy::panic_in_result_fn))]

mod api;
mod clock;
mod command;
mod controller;
mod error;
mod metadata;
mod model;
mod prompt;
mod render;
mod session;
mod storage;
mod terminal;
mod view;

use std::{process, sync::Arc, time::Duration};

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use command::App;
use error::Result;
use futures_util::lock::Mutex;
use log::{debug, error, warn};
use url::Url;

use crate::{api::HttpApi, clock::SystemClock, model::Session, terminal::Terminal};

#[derive(Debug, Subcommand)]
enum Command {
    Show(command::show::Command),
    Login(command::login::Command),
    Logout(command::logout::Command),
    Details(command::details::Command),
    Health(command::health::Command),
    Shell(command::shell::Command),
}

#[async_trait]
impl command::Command for Command {
    async fn execute(self, app: &App) -> Result<()> {
        match self {
            Self::Show(cmd) => cmd.execute(app).await,
            Self::Login(cmd) => cmd.execute(app).await,
            Self::Logout(cmd) => cmd.execute(app).await,
            Self::Details(cmd) => cmd.execute(app).await,
            Self::Health(cmd) => cmd.execute(app).await,
            Self::Shell(cmd) => cmd.execute(app).await,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The base URL of the attendance service API.
    #[arg(long, env = "ATTENDANCE_API_URL", default_value = metadata::DEFAULT_API_URL, value_parser = Url::parse)]
    url: Url,

    /// Keep the login in memory only, so it is forgotten when the program
    /// exits.
    #[arg(long)]
    no_persist_session: bool,

    /// How long to show the welcome message before loading attendance, in
    /// milliseconds.
    #[arg(long, default_value_t = 1000)]
    login_delay_ms: u64,

    #[clap(subcommand)]
    command: Command,
}

fn get_session_storage(args: &Args) -> Box<dyn storage::Storage<Session>> {
    if !args.no_persist_session {
        if let Some(file_storage) = storage::File::new(metadata::SESSION_FILE_NAME) {
            debug!("Keeping the session in {}", file_storage.path().display());
            return Box::new(file_storage);
        }
        warn!("We need to fall back to in-memory storage because this platform has no data directory; the login will not be remembered");
    }

    Box::new(storage::Memory::<Session>::new())
}

async fn run(args: Args) -> Result<()> {
    let store = session::Store::new(Arc::new(Mutex::new(get_session_storage(&args))));
    let config = controller::Config {
        login_delay: Duration::from_millis(args.login_delay_ms),
        ..controller::Config::default()
    };
    let app = controller::Controller::new(
        HttpApi::new(args.url)?,
        store,
        Terminal,
        SystemClock,
        config,
    );

    command::Command::execute(args.command, &app).await
}

#[tokio::main]
async fn main() {
    let logger_env = env_logger::Env::new()
        .filter_or("ATTENDANCE_LOG", "warn")
        .write_style("ATTENDANCE_LOG_STYLE");
    env_logger::Builder::from_env(logger_env).init();

    if let Err(e) = run(Args::parse()).await {
        error!("We encountered an error: {}", e);
        process::exit(1);
    };
}
