// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use rayon::prelude::*;

use nre::cli::{Cli, MatchArgs, OutputFormat};
use nre::config;
use nre::error::{Error, ExitCode};
use nre::name::Name;
use nre::output::json::JsonFormatter;
use nre::output::text::TextFormatter;
use nre::output::{FormatOptions, NameReport, matched_count};
use nre::pattern::Pattern;

/// Run the match command.
pub fn run(cli: &Cli, args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::load_resolved(cli.config.as_deref(), &cwd)?;
    let options = FormatOptions::resolve(&args.output, &config.output)?;

    let pattern = Pattern::compile(&args.pattern).map_err(Error::from)?;
    let names = args
        .names
        .iter()
        .map(|uri| Name::parse(uri))
        .collect::<Result<Vec<_>, _>>()
        .map_err(Error::from)?;

    tracing::debug!(names = names.len(), find = args.find, "matching");

    // Order of the collected reports follows the argument order.
    let reports: Vec<NameReport> = names
        .into_par_iter()
        .map(|name| evaluate(&pattern, args, name))
        .collect();

    match options.format {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::stdout(options.color);
            for report in &reports {
                formatter.write_report(report)?;
            }
            formatter.write_summary(&reports)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout(), options.compact).write_match(&pattern, &reports)?
        }
    }

    if matched_count(&reports) == reports.len() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::NoMatch)
    }
}

fn evaluate(pattern: &Pattern, args: &MatchArgs, name: Name) -> NameReport {
    if args.find {
        let found = pattern.find(&name);
        return NameReport::from_find(name, found);
    }
    let count = args.count_for(name.len());
    let result = pattern.match_range(&name, args.start, count);
    NameReport::from_range(name, args.start, count, result)
}
