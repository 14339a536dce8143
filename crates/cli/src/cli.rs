// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

/// Compile component-level name patterns and match them against names
#[derive(Parser)]
#[command(name = "nre")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "NRE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a pattern and show its compiled form
    Compile(CompileArgs),
    /// Match a pattern against one or more names
    Match(MatchArgs),
}

/// Flags shared by every command that prints results.
#[derive(clap::Args, Default)]
pub struct OutputArgs {
    /// Output format (default: text, or the config's output.format)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// Output compact JSON (no whitespace, single line)
    #[arg(long)]
    pub compact: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct CompileArgs {
    /// Pattern text
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Pattern text
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Names in URI form (e.g., /a/b/c or ndn:/a/b/c)
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// First component of the matched range
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub start: usize,

    /// Number of components to consume (default: the rest of the name)
    #[arg(long, value_name = "N")]
    pub count: Option<usize>,

    /// Search for the leftmost, longest matching range instead
    #[arg(long, conflicts_with_all = ["start", "count"])]
    pub find: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl MatchArgs {
    /// Component count to consume from a name of `len` components.
    ///
    /// Without `--count` this is everything after `--start`; a start past
    /// the end yields zero, which the matcher reports as out of range.
    pub fn count_for(&self, len: usize) -> usize {
        self.count.unwrap_or_else(|| len.saturating_sub(self.start))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
