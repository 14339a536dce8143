//! Output formatting for compile and match results.

pub mod json;
pub mod text;

use termcolor::ColorChoice;

use crate::cli::{OutputArgs, OutputFormat};
use crate::color::{ColorMode, resolve_color};
use crate::config::OutputConfig;
use crate::error::{Error, Result};
use crate::name::{Component, Name};
use crate::pattern::{Found, MatchResult};

/// Output formatting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub format: OutputFormat,
    /// Single-line JSON.
    pub compact: bool,
    pub color: ColorChoice,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            compact: false,
            color: ColorChoice::Never,
        }
    }
}

impl FormatOptions {
    /// Merge command-line flags over the configured output defaults.
    pub fn resolve(args: &OutputArgs, config: &OutputConfig) -> Result<Self> {
        let format = args.output.unwrap_or(config.format);
        if args.compact && format != OutputFormat::Json {
            return Err(Error::Argument(
                "--compact only applies to JSON output (use -o json)".to_string(),
            ));
        }
        let mode = ColorMode::from_flags(args.color, args.no_color, config.color);
        Ok(Self {
            format,
            compact: args.compact || config.compact,
            color: resolve_color(mode),
        })
    }
}

/// Outcome of matching one name, as reported by `nre match`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameReport {
    pub name: Name,
    /// The `(start, count)` slice tested, or found by a search.
    /// `None` when a search found nothing.
    pub range: Option<(usize, usize)>,
    pub matched: bool,
    pub captures: Vec<Component>,
}

impl NameReport {
    /// Report for an explicit range.
    pub fn from_range(name: Name, start: usize, count: usize, result: MatchResult) -> Self {
        Self {
            name,
            range: Some((start, count)),
            matched: result.success,
            captures: result.captures,
        }
    }

    /// Report for a leftmost-longest search.
    pub fn from_find(name: Name, found: Option<Found>) -> Self {
        match found {
            Some(found) => Self {
                name,
                range: Some((found.start, found.count)),
                matched: true,
                captures: found.captures,
            },
            None => Self {
                name,
                range: None,
                matched: false,
                captures: Vec::new(),
            },
        }
    }
}

/// Number of reports that matched.
pub fn matched_count(reports: &[NameReport]) -> usize {
    reports.iter().filter(|r| r.matched).count()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
