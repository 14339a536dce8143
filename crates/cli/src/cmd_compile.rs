// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile command implementation.

use nre::cli::{Cli, CompileArgs, OutputFormat};
use nre::config;
use nre::error::{Error, ExitCode};
use nre::output::FormatOptions;
use nre::output::json::JsonFormatter;
use nre::output::text::TextFormatter;
use nre::pattern::Pattern;

/// Run the compile command.
pub fn run(cli: &Cli, args: &CompileArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::load_resolved(cli.config.as_deref(), &cwd)?;
    let options = FormatOptions::resolve(&args.output, &config.output)?;

    let pattern = Pattern::compile(&args.pattern).map_err(Error::from)?;

    match options.format {
        OutputFormat::Text => TextFormatter::stdout(options.color).write_compile(&pattern)?,
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout(), options.compact).write_compile(&pattern)?
        }
    }

    Ok(ExitCode::Success)
}
