// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled matcher nodes.
//!
//! Every node carries the static range of component counts it can consume,
//! computed bottom-up when the node is built. The matching engine uses these
//! ranges to reject impossible requests without touching the name.

use std::fmt;

use percent_encoding::percent_encode;
use serde::Serialize;

use crate::name::{COMPONENT_ESCAPES, Component};

/// Inclusive range of component counts a node can consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub min: usize,
    /// `None` when unbounded.
    pub max: Option<usize>,
}

impl Span {
    /// The span of an atom: exactly one component.
    pub const ONE: Span = Span::exact(1);

    /// The span of an empty sequence.
    pub const EMPTY: Span = Span::exact(0);

    pub const fn exact(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }

    /// Span of two nodes consumed one after the other.
    pub fn then(self, next: Span) -> Span {
        Span {
            min: self.min.saturating_add(next.min),
            max: match (self.max, next.max) {
                (Some(a), Some(b)) => a.checked_add(b),
                _ => None,
            },
        }
    }

    /// Span of `self` repeated between `min` and `max` times.
    pub fn repeated(self, min: usize, max: Option<usize>) -> Span {
        let upper = match (self.max, max) {
            (Some(0), _) | (_, Some(0)) => Some(0),
            (Some(a), Some(b)) => a.checked_mul(b),
            _ => None,
        };
        Span {
            min: self.min.saturating_mul(min),
            max: upper,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "[{}, {}]", self.min, max),
            None => write!(f, "[{}, inf]", self.min),
        }
    }
}

/// One candidate of a component set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetMember {
    Literal(Component),
    /// Matches every component (`<.*>`).
    Any,
}

/// A finite alternation of single components, optionally negated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSet {
    members: Vec<SetMember>,
    negated: bool,
}

impl ComponentSet {
    pub fn new(members: Vec<SetMember>, negated: bool) -> Self {
        Self { members, negated }
    }

    /// The universal wildcard.
    pub fn any() -> Self {
        Self::new(vec![SetMember::Any], false)
    }

    pub fn members(&self) -> &[SetMember] {
        &self.members
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn is_wildcard(&self) -> bool {
        !self.negated && self.members == [SetMember::Any]
    }

    /// Whether `component` passes this set's test, honoring polarity.
    pub fn accepts(&self, component: &[u8]) -> bool {
        let member = self.members.iter().any(|m| match m {
            SetMember::Any => true,
            SetMember::Literal(value) => value.as_bytes() == component,
        });
        member != self.negated
    }
}

/// Children consumed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    children: Vec<Node>,
    /// `suffixes[i]` is the span of `children[i..]`.
    suffixes: Vec<Span>,
}

impl Sequence {
    pub fn new(children: Vec<Node>) -> Self {
        let mut suffixes = vec![Span::EMPTY; children.len() + 1];
        for (i, child) in children.iter().enumerate().rev() {
            suffixes[i] = child.span().then(suffixes[i + 1]);
        }
        Self { children, suffixes }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Span of the children from `index` onward.
    pub fn suffix_span(&self, index: usize) -> Span {
        self.suffixes.get(index).copied().unwrap_or(Span::EMPTY)
    }
}

/// A child repeated between `min` and `max` times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    child: Box<Node>,
    min: usize,
    max: Option<usize>,
}

impl Repeat {
    pub fn new(child: Node, min: usize, max: Option<usize>) -> Self {
        Self {
            child: Box::new(child),
            min,
            max,
        }
    }

    pub fn child(&self) -> &Node {
        &self.child
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// The quantifier text for this repetition range, e.g. `*` or `{2,3}`.
    pub fn quantifier(&self) -> String {
        match (self.min, self.max) {
            (0, Some(1)) => "?".to_string(),
            (0, None) => "*".to_string(),
            (1, None) => "+".to_string(),
            (n, None) => format!("{{{},}}", n),
            (n, Some(m)) if n == m => format!("{{{}}}", n),
            (0, Some(m)) => format!("{{,{}}}", m),
            (n, Some(m)) => format!("{{{},{}}}", n, m),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Literal(Component),
    Set(ComponentSet),
    Sequence(Sequence),
    Repeat(Repeat),
}

/// A node of a compiled pattern.
///
/// The `id` is unique within one pattern and keys the engine's per-call
/// failure memo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: usize,
    span: Span,
    kind: NodeKind,
}

impl Node {
    pub fn new(id: usize, kind: NodeKind) -> Self {
        let span = match &kind {
            NodeKind::Literal(_) | NodeKind::Set(_) => Span::ONE,
            NodeKind::Sequence(seq) => seq.suffix_span(0),
            NodeKind::Repeat(rep) => rep.child().span().repeated(rep.min(), rep.max()),
        };
        Self { id, span, kind }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Short label used when printing a node tree.
    pub fn label(&self) -> &'static str {
        match &self.kind {
            NodeKind::Literal(_) => "literal",
            NodeKind::Set(set) if set.is_wildcard() => "wildcard",
            NodeKind::Set(_) => "set",
            NodeKind::Sequence(_) => "sequence",
            NodeKind::Repeat(_) => "repeat",
        }
    }

    /// Whether this node's text is a bare `<...>` atom.
    fn writes_as_atom(&self) -> bool {
        match &self.kind {
            NodeKind::Literal(_) => true,
            NodeKind::Set(set) => set.is_wildcard(),
            NodeKind::Sequence(_) | NodeKind::Repeat(_) => false,
        }
    }

    /// Write this node as one item of an enclosing sequence.
    fn write_item(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Sequence(seq) => write_group(f, seq),
            _ => write!(f, "{}", self),
        }
    }

    /// Write this node as the operand of a quantifier.
    fn write_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Sequence(seq) => write_group(f, seq),
            NodeKind::Repeat(_) => write!(f, "[{}]", self),
            _ => write!(f, "{}", self),
        }
    }
}

/// Write a sequence in brackets.
///
/// Brackets holding only bare atoms read back as a component set, so in
/// that case the first atom is written as a one-member set. An empty
/// sequence is written as a zero-width repeat.
fn write_group(f: &mut fmt::Formatter<'_>, seq: &Sequence) -> fmt::Result {
    let children = seq.children();
    f.write_str("[")?;
    if children.is_empty() {
        f.write_str("<.*>{0}")?;
    }
    let atoms_only = children.iter().all(Node::writes_as_atom);
    for (i, child) in children.iter().enumerate() {
        if i == 0 && atoms_only {
            write!(f, "[{}]", child)?;
        } else {
            child.write_item(f)?;
        }
    }
    f.write_str("]")
}

fn write_component(f: &mut fmt::Formatter<'_>, value: &Component) -> fmt::Result {
    write!(f, "<{}>", percent_encode(value.as_bytes(), COMPONENT_ESCAPES))
}

/// Renders canonical pattern text that compiles back to an equivalent tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Literal(value) => write_component(f, value),
            NodeKind::Set(set) if set.is_wildcard() => f.write_str("<.*>"),
            NodeKind::Set(set) => {
                f.write_str(if set.is_negated() { "[^" } else { "[" })?;
                for member in set.members() {
                    match member {
                        SetMember::Any => f.write_str("<.*>")?,
                        SetMember::Literal(value) => write_component(f, value)?,
                    }
                }
                f.write_str("]")
            }
            NodeKind::Sequence(seq) => {
                for child in seq.children() {
                    child.write_item(f)?;
                }
                Ok(())
            }
            NodeKind::Repeat(rep) => {
                rep.child().write_operand(f)?;
                f.write_str(&rep.quantifier())
            }
        }
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
