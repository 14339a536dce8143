// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Backtracking search over a compiled tree.
//!
//! The search is greedy: sequences hand the largest feasible count to the
//! leftmost child first, repeats try the most repetitions first. All state
//! lives in a [`Context`] owned by one call, so a compiled pattern is never
//! written to while matching.

use std::collections::HashSet;

use super::node::{Node, NodeKind, Repeat, Sequence, Span};
use crate::name::Name;

/// Identifies a sub-search that is known to fail.
///
/// `step` is the child index for sequences and the remaining repetition
/// count for repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MemoKey {
    node: usize,
    step: usize,
    start: usize,
    count: usize,
}

/// Per-call matching state.
///
/// Failures are recorded against absolute name positions, so one context
/// can serve several requests against the same name.
pub(crate) struct Context<'n> {
    name: &'n Name,
    /// Positions of captured components, in consumption order.
    captures: Vec<usize>,
    failed: HashSet<MemoKey>,
}

impl<'n> Context<'n> {
    pub(crate) fn new(name: &'n Name) -> Self {
        Self {
            name,
            captures: Vec::new(),
            failed: HashSet::new(),
        }
    }

    /// Match `root` against `[start, start + count)`.
    ///
    /// Returns the captured positions on success. The caller guarantees the
    /// range lies within the name.
    pub(crate) fn attempt(&mut self, root: &Node, start: usize, count: usize) -> Option<Vec<usize>> {
        self.captures.clear();
        if self.node(root, start, count) {
            Some(std::mem::take(&mut self.captures))
        } else {
            self.captures.clear();
            None
        }
    }

    fn node(&mut self, node: &Node, start: usize, count: usize) -> bool {
        if !node.span().contains(count) {
            return false;
        }
        match node.kind() {
            NodeKind::Literal(value) => self.atom(start, count, |c| c == value.as_bytes()),
            NodeKind::Set(set) => self.atom(start, count, |c| set.accepts(c)),
            NodeKind::Sequence(seq) => self.chain(node.id(), Chain::Children(seq), 0, start, count),
            NodeKind::Repeat(rep) => self.repeat(node.id(), rep, start, count),
        }
    }

    fn atom(&mut self, start: usize, count: usize, test: impl Fn(&[u8]) -> bool) -> bool {
        if count != 1 {
            return false;
        }
        match self.name.get(start) {
            Some(component) if test(component.as_bytes()) => {
                self.captures.push(start);
                true
            }
            _ => false,
        }
    }

    fn repeat(&mut self, id: usize, rep: &Repeat, start: usize, count: usize) -> bool {
        let unit = rep.child().span();
        // A child that can match empty pads any number of copies, so only
        // the copies that consume something need searching.
        let (least, fit) = match unit.min {
            0 => (0, count),
            min => (rep.min(), count / min),
        };
        let most = rep.max().map_or(fit, |max| max.min(fit));
        if most < least {
            return false;
        }
        (least..=most)
            .rev()
            .any(|reps| self.chain(id, Chain::Copies(rep.child()), reps, start, count))
    }

    /// Match the links of `chain` from `step` on against exactly `count`
    /// components.
    ///
    /// Each link takes the largest feasible share first. The search keeps
    /// its open links on a heap stack, so long names do not deepen the call
    /// stack.
    fn chain<'p>(&mut self, id: usize, chain: Chain<'p>, step: usize, start: usize, count: usize) -> bool {
        let mut frames: Vec<Frame<'p>> = Vec::new();
        let mut open = Some((step, start, count));
        loop {
            if let Some((step, start, count)) = open.take() {
                let key = MemoKey {
                    node: id,
                    step,
                    start,
                    count,
                };
                match chain.link(step) {
                    None if count == 0 => return true,
                    None => {}
                    Some(_) if self.failed.contains(&key) => {}
                    Some((head, rest, next)) => match shares(head.span(), rest, count) {
                        Some((least, most)) => frames.push(Frame {
                            key,
                            head,
                            next,
                            least,
                            take: Some(most),
                            mark: self.captures.len(),
                        }),
                        None => {
                            self.failed.insert(key);
                        }
                    },
                }
            }

            // Retry the innermost open link with its next smaller share.
            let Some(frame) = frames.last_mut() else {
                return false;
            };
            self.captures.truncate(frame.mark);
            let Some(take) = frame.take else {
                let key = frame.key;
                frames.pop();
                self.failed.insert(key);
                continue;
            };
            let least = frame.least;
            frame.take = take.checked_sub(1).filter(|&t| t >= least);
            let (head, next, start, count) = (frame.head, frame.next, frame.key.start, frame.key.count);
            if self.node(head, start, take) {
                open = Some((next, start + take, count - take));
            }
        }
    }
}

/// A run of nodes consumed one after another.
#[derive(Clone, Copy)]
enum Chain<'p> {
    /// The children of a sequence; a step is a child index.
    Children(&'p Sequence),
    /// Copies of a repeated child; a step is the number of copies left.
    Copies(&'p Node),
}

impl<'p> Chain<'p> {
    /// The node at `step`, the span of everything after it and the step
    /// that follows. `None` once the chain is exhausted.
    fn link(self, step: usize) -> Option<(&'p Node, Span, usize)> {
        match self {
            Chain::Children(seq) => seq
                .children()
                .get(step)
                .map(|child| (child, seq.suffix_span(step + 1), step + 1)),
            Chain::Copies(child) => step.checked_sub(1).map(|left| {
                (child, child.span().repeated(left, Some(left)), left)
            }),
        }
    }
}

/// An open link of a chain search.
struct Frame<'p> {
    key: MemoKey,
    head: &'p Node,
    next: usize,
    least: usize,
    /// Next share to hand `head`; `None` once every share has failed.
    take: Option<usize>,
    /// Capture count before `head` consumed anything.
    mark: usize,
}

/// Range of counts `unit` may take out of `count` so that a tail spanning
/// `rest` can consume the remainder.
fn shares(unit: Span, rest: Span, count: usize) -> Option<(usize, usize)> {
    let room = count.checked_sub(rest.min)?;
    let most = unit.max.map_or(room, |max| max.min(room));
    let least = rest
        .max
        .map_or(unit.min, |max| unit.min.max(count.saturating_sub(max)));
    (least <= most).then_some((least, most))
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
