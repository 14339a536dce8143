// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order for `auto`:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. stdout is not a TTY, or CI is set → no color
//! 4. otherwise → use color

use std::io::IsTerminal;

use serde::Deserialize;
use termcolor::ColorChoice;

/// Requested color behavior.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Combine the `--color`/`--no-color` flags with a configured mode.
    /// Flags win; `--no-color` wins over `--color`.
    pub fn from_flags(color: bool, no_color: bool, configured: ColorMode) -> Self {
        if no_color {
            ColorMode::Never
        } else if color {
            ColorMode::Always
        } else {
            configured
        }
    }
}

/// Resolve a color mode to a termcolor choice.
pub fn resolve_color(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => detect_color(),
    }
}

/// Auto-detect from the environment.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
fn detect_color() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || std::env::var_os("CI").is_some() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for match output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold name URI.
    pub fn name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Green "match" indicator.
    pub fn matched() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Red "no match" indicator.
    pub fn unmatched() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Cyan captured component.
    pub fn capture() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow span or range.
    pub fn range() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
