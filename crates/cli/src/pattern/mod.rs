// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Component-level name patterns.
//!
//! A pattern is compiled once into an immutable tree of matcher nodes and
//! then matched against any number of names:
//! - Literal: one component equal to a fixed value
//! - Set: one component in (or not in) a list of values, or any component
//! - Sequence: children consumed in order
//! - Repeat: a child repeated within a quantifier's range
//!
//! Matching consumes exactly the requested number of components; a mismatch
//! is an ordinary result, never an error.

pub mod matcher;
pub mod node;
pub mod parse;

use std::fmt;
use std::str::FromStr;

pub use node::{ComponentSet, Node, NodeKind, Repeat, Sequence, SetMember, Span};
pub use parse::PatternSyntaxError;

use crate::name::{Component, Name};
use matcher::Context;

/// A compiled pattern.
///
/// Immutable after compilation; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    root: Node,
}

/// Outcome of matching a pattern against a slice of a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub success: bool,
    /// Components consumed by atoms, in left-to-right order.
    pub captures: Vec<Component>,
}

/// A matching slice located by [`Pattern::find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub start: usize,
    pub count: usize,
    pub captures: Vec<Component>,
}

/// Compile pattern text.
pub fn compile(text: &str) -> Result<Pattern, PatternSyntaxError> {
    Pattern::compile(text)
}

impl MatchResult {
    pub fn mismatch() -> Self {
        Self::default()
    }

    fn captured(name: &Name, positions: &[usize]) -> Self {
        Self {
            success: true,
            captures: collect_captures(name, positions),
        }
    }
}

impl Pattern {
    /// Compile pattern text into a matcher tree.
    pub fn compile(text: &str) -> Result<Self, PatternSyntaxError> {
        let root = parse::parse(text)?;
        tracing::debug!(pattern = text, span = %root.span(), "compiled pattern");
        Ok(Self {
            source: text.to_string(),
            root,
        })
    }

    /// The text this pattern was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Range of component counts this pattern can consume.
    pub fn span(&self) -> Span {
        self.root.span()
    }

    /// Match exactly `count` components of `name` starting at `start`.
    ///
    /// Ranges outside the name are a mismatch.
    pub fn match_range(&self, name: &Name, start: usize, count: usize) -> MatchResult {
        if !in_bounds(name, start, count) {
            tracing::trace!(start, count, len = name.len(), "range outside name");
            return MatchResult::mismatch();
        }
        let result = match Context::new(name).attempt(&self.root, start, count) {
            Some(positions) => MatchResult::captured(name, &positions),
            None => MatchResult::mismatch(),
        };
        tracing::trace!(
            pattern = %self.source,
            %name,
            start,
            count,
            success = result.success,
            "match"
        );
        result
    }

    /// Match the whole name.
    pub fn matches(&self, name: &Name) -> MatchResult {
        self.match_range(name, 0, name.len())
    }

    pub fn is_match(&self, name: &Name, start: usize, count: usize) -> bool {
        self.match_range(name, start, count).success
    }

    /// Find the leftmost matching slice of `name`, preferring the longest
    /// slice at that start.
    pub fn find(&self, name: &Name) -> Option<Found> {
        let span = self.span();
        let mut ctx = Context::new(name);
        for start in 0..=name.len() {
            let available = name.len() - start;
            let longest = span.max.map_or(available, |max| max.min(available));
            if span.min > longest {
                continue;
            }
            for count in (span.min..=longest).rev() {
                if let Some(positions) = ctx.attempt(&self.root, start, count) {
                    return Some(Found {
                        start,
                        count,
                        captures: collect_captures(name, &positions),
                    });
                }
            }
        }
        None
    }
}

fn in_bounds(name: &Name, start: usize, count: usize) -> bool {
    start
        .checked_add(count)
        .is_some_and(|end| end <= name.len())
}

fn collect_captures(name: &Name, positions: &[usize]) -> Vec<Component> {
    positions
        .iter()
        .filter_map(|&i| name.get(i).cloned())
        .collect()
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl FromStr for Pattern {
    type Err = PatternSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
