//! Component-level name patterns for hierarchically-named data.
//!
//! A [`Name`] is an ordered sequence of opaque byte-string components. A
//! [`Pattern`] describes acceptable component sequences with a small
//! regular-expression-like grammar; matching tests whether an exact slice of
//! a name satisfies it and returns the components each atom consumed.

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod name;
pub mod output;
pub mod pattern;

pub use cli::{Cli, Command, CompileArgs, MatchArgs, OutputFormat};
pub use color::ColorMode;
pub use error::{Error, ExitCode, Result};
pub use name::{Component, Name, NameError};
pub use pattern::{Found, MatchResult, Pattern, PatternSyntaxError, compile};
