//! Text output formatter.
//!
//! Compile output:
//! ```text
//! pattern: <a>[<b><c>]*
//! span: [1, inf]
//! sequence [1, inf]
//!   literal <a> [1, 1]
//!   repeat * [0, inf]
//! ```
//!
//! Match output, one line per name followed by a summary:
//! ```text
//! /a/b/c: match 0..3 <a> <b> <c>
//! /x: no match
//! 1 of 2 names matched
//! ```

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::{NameReport, matched_count};
use crate::color::scheme;
use crate::pattern::{Node, NodeKind, Pattern};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    writer: W,
}

impl TextFormatter<StandardStream> {
    /// Create a formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write a compiled pattern: canonical text, span and node tree.
    pub fn write_compile(&mut self, pattern: &Pattern) -> std::io::Result<()> {
        write!(self.writer, "pattern: ")?;
        self.writer.set_color(&scheme::name())?;
        write!(self.writer, "{}", pattern)?;
        self.writer.reset()?;
        writeln!(self.writer)?;

        write!(self.writer, "span: ")?;
        self.writer.set_color(&scheme::range())?;
        write!(self.writer, "{}", pattern.span())?;
        self.writer.reset()?;
        writeln!(self.writer)?;

        self.write_node(pattern.root(), 0)
    }

    fn write_node(&mut self, node: &Node, depth: usize) -> std::io::Result<()> {
        write!(self.writer, "{:indent$}{}", "", node.label(), indent = depth * 2)?;
        match node.kind() {
            NodeKind::Literal(_) | NodeKind::Set(_) => write!(self.writer, " {}", node)?,
            NodeKind::Repeat(rep) => write!(self.writer, " {}", rep.quantifier())?,
            NodeKind::Sequence(_) => {}
        }
        write!(self.writer, " ")?;
        self.writer.set_color(&scheme::range())?;
        write!(self.writer, "{}", node.span())?;
        self.writer.reset()?;
        writeln!(self.writer)?;

        match node.kind() {
            NodeKind::Sequence(seq) => {
                for child in seq.children() {
                    self.write_node(child, depth + 1)?;
                }
            }
            NodeKind::Repeat(rep) => self.write_node(rep.child(), depth + 1)?,
            NodeKind::Literal(_) | NodeKind::Set(_) => {}
        }
        Ok(())
    }

    /// Write the result line for one name.
    pub fn write_report(&mut self, report: &NameReport) -> std::io::Result<()> {
        self.writer.set_color(&scheme::name())?;
        write!(self.writer, "{}", report.name)?;
        self.writer.reset()?;
        write!(self.writer, ": ")?;

        if !report.matched {
            self.writer.set_color(&scheme::unmatched())?;
            write!(self.writer, "no match")?;
            self.writer.reset()?;
            return writeln!(self.writer);
        }

        self.writer.set_color(&scheme::matched())?;
        write!(self.writer, "match")?;
        self.writer.reset()?;

        if let Some((start, count)) = report.range {
            write!(self.writer, " ")?;
            self.writer.set_color(&scheme::range())?;
            write!(self.writer, "{}..{}", start, start + count)?;
            self.writer.reset()?;
        }

        for capture in &report.captures {
            write!(self.writer, " ")?;
            self.writer.set_color(&scheme::capture())?;
            write!(self.writer, "<{}>", capture)?;
            self.writer.reset()?;
        }
        writeln!(self.writer)
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, reports: &[NameReport]) -> std::io::Result<()> {
        let total = reports.len();
        writeln!(
            self.writer,
            "{} of {} name{} matched",
            matched_count(reports),
            total,
            if total == 1 { "" } else { "s" }
        )
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
