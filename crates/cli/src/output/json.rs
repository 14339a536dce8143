// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed). Components are
//! rendered in their percent-encoded URI form.

use std::io::Write;

use serde::Serialize;

use super::{NameReport, matched_count};
use crate::pattern::{Node, NodeKind, Pattern, Span};

/// `nre compile` output.
#[derive(Debug, Serialize)]
pub struct CompileOutput {
    pub pattern: String,
    pub canonical: String,
    pub span: Span,
    pub tree: NodeOutput,
}

/// One node of the compiled tree.
#[derive(Debug, Serialize)]
pub struct NodeOutput {
    pub kind: &'static str,
    /// Pattern text of an atom, or the quantifier of a repeat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub span: Span,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeOutput>,
}

/// `nre match` output.
#[derive(Debug, Serialize)]
pub struct MatchOutput {
    pub pattern: String,
    pub passed: bool,
    pub matched: usize,
    pub total: usize,
    pub results: Vec<NameOutput>,
}

/// Result for one name.
#[derive(Debug, Serialize)]
pub struct NameOutput {
    pub name: String,
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub captures: Vec<String>,
}

impl From<&Pattern> for CompileOutput {
    fn from(pattern: &Pattern) -> Self {
        Self {
            pattern: pattern.source().to_string(),
            canonical: pattern.to_string(),
            span: pattern.span(),
            tree: pattern.root().into(),
        }
    }
}

impl From<&Node> for NodeOutput {
    fn from(node: &Node) -> Self {
        let (text, children) = match node.kind() {
            NodeKind::Literal(_) | NodeKind::Set(_) => (Some(node.to_string()), Vec::new()),
            NodeKind::Sequence(seq) => (None, seq.children().iter().map(Into::into).collect()),
            NodeKind::Repeat(rep) => (Some(rep.quantifier()), vec![rep.child().into()]),
        };
        Self {
            kind: node.label(),
            text,
            span: node.span(),
            children,
        }
    }
}

impl From<&NameReport> for NameOutput {
    fn from(report: &NameReport) -> Self {
        Self {
            name: report.name.to_string(),
            matched: report.matched,
            start: report.range.map(|(start, _)| start),
            count: report.range.map(|(_, count)| count),
            captures: report.captures.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Build match output for a set of reports, in report order.
pub fn create_match_output(pattern: &Pattern, reports: &[NameReport]) -> MatchOutput {
    let matched = matched_count(reports);
    MatchOutput {
        pattern: pattern.source().to_string(),
        passed: matched == reports.len(),
        matched,
        total: reports.len(),
        results: reports.iter().map(Into::into).collect(),
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
    compact: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter; `compact` writes a single line.
    pub fn new(writer: W, compact: bool) -> Self {
        Self { writer, compact }
    }

    pub fn write_compile(&mut self, pattern: &Pattern) -> std::io::Result<()> {
        self.write_value(&CompileOutput::from(pattern))
    }

    pub fn write_match(&mut self, pattern: &Pattern, reports: &[NameReport]) -> std::io::Result<()> {
        self.write_value(&create_match_output(pattern, reports))
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = if self.compact {
            serde_json::to_string(value)
        } else {
            serde_json::to_string_pretty(value)
        }
        .map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
