// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! nre: compile name patterns and match names against them.

use std::process;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use nre::cli::{Cli, Command};
use nre::error::ExitCode;

mod cmd_compile;
mod cmd_match;

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "NRE_LOG";

fn main() -> process::ExitCode {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let code = match dispatch(Cli::parse()) {
        Ok(code) => code,
        Err(err) => report(&err),
    };
    code.into()
}

fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Some(Command::Compile(args)) => cmd_compile::run(&cli, args),
        Some(Command::Match(args)) => cmd_match::run(&cli, args),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
    }
}

/// Print `err` to stderr and pick the exit code for it.
fn report(err: &anyhow::Error) -> ExitCode {
    eprintln!("nre: {err}");
    err.downcast_ref::<nre::Error>()
        .map_or(ExitCode::InternalError, ExitCode::from)
}
