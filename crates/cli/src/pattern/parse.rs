// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern text parser.
//!
//! Grammar, where every atom stands for exactly one name component:
//!
//! ```text
//! pattern    := item*
//! item       := (atom | bracket) quantifier?
//! atom       := '<' text '>' | bare
//! bracket    := '[' '^'? item+ ']'
//! quantifier := '?' | '*' | '+' | '{' n '}' | '{' n ',' '}' | '{' ',' m '}' | '{' n ',' m '}'
//! ```
//!
//! `<.*>` is the wildcard. A bracket whose items are all unquantified
//! literal or wildcard atoms is a component set; any other bracket is a
//! group compiled to a sequence. Literal text is percent-decoded.

use percent_encoding::percent_decode_str;

use super::node::{ComponentSet, Node, NodeKind, Repeat, Sequence, SetMember};
use crate::name::Component;

/// Characters with structural meaning outside `<...>`.
const STRUCTURAL: &[char] = &['<', '>', '[', ']', '^', '?', '*', '+', '{', '}', '(', ')'];

const WILDCARD: &str = ".*";

/// Malformed pattern text. Offsets are byte offsets into the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternSyntaxError {
    #[error("unclosed '{open}' at offset {offset}")]
    Unclosed { open: char, offset: usize },

    #[error("unexpected '{close}' at offset {offset}")]
    UnexpectedClose { close: char, offset: usize },

    #[error("unrecognized quantifier '{text}' at offset {offset}")]
    UnrecognizedQuantifier { text: String, offset: usize },

    #[error("empty repeat range {{{min},{max}}} at offset {offset}")]
    EmptyRange {
        min: usize,
        max: usize,
        offset: usize,
    },

    #[error("quantifier at offset {offset} has nothing to repeat")]
    NothingToRepeat { offset: usize },

    #[error("empty component set at offset {offset}")]
    EmptySet { offset: usize },

    #[error("negated bracket at offset {offset} must list single components only")]
    NegatedGroup { offset: usize },

    #[error("unexpected '{found}' at offset {offset}")]
    Unexpected { found: char, offset: usize },
}

type Result<T> = std::result::Result<T, PatternSyntaxError>;

/// A parsed item together with what the bracket rule needs to know about it.
struct Item {
    node: Node,
    /// Unquantified literal or wildcard atom.
    singleton: bool,
    quantified: bool,
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    next_id: usize,
}

/// Parse pattern text into the root node of a compiled tree.
///
/// A pattern of exactly one item compiles to that item; anything else is a
/// sequence.
pub(crate) fn parse(src: &str) -> Result<Node> {
    let mut parser = Parser {
        src,
        pos: 0,
        next_id: 0,
    };
    let mut items = parser.items(None)?;
    if items.len() == 1
        && let Some(item) = items.pop()
    {
        return Ok(item.node);
    }
    let children = items.into_iter().map(|item| item.node).collect();
    Ok(parser.node(NodeKind::Sequence(Sequence::new(children))))
}

impl Parser<'_> {
    fn node(&mut self, kind: NodeKind) -> Node {
        let id = self.next_id;
        self.next_id += 1;
        Node::new(id, kind)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Parse items until end of input, or until the `]` closing the bracket
    /// opened at `open`.
    fn items(&mut self, open: Option<usize>) -> Result<Vec<Item>> {
        let mut items: Vec<Item> = Vec::new();
        loop {
            self.skip_whitespace();
            let offset = self.pos;
            let Some(c) = self.peek() else {
                return match open {
                    Some(offset) => Err(PatternSyntaxError::Unclosed { open: '[', offset }),
                    None => Ok(items),
                };
            };
            match c {
                ']' if open.is_some() => {
                    self.bump();
                    return Ok(items);
                }
                ']' | '>' | '}' => {
                    return Err(PatternSyntaxError::UnexpectedClose { close: c, offset });
                }
                '<' => items.push(self.angle()?),
                '[' => items.push(self.bracket()?),
                '?' | '*' | '+' | '{' => {
                    let (min, max) = self.quantifier()?;
                    let item = match items.pop() {
                        Some(item) if !item.quantified => item,
                        _ => return Err(PatternSyntaxError::NothingToRepeat { offset }),
                    };
                    let node = self.node(NodeKind::Repeat(Repeat::new(item.node, min, max)));
                    items.push(Item {
                        node,
                        singleton: false,
                        quantified: true,
                    });
                }
                '^' | '(' | ')' => {
                    return Err(PatternSyntaxError::Unexpected { found: c, offset });
                }
                _ => items.push(self.bare()),
            }
        }
    }

    /// `<text>` literal or `<.*>` wildcard.
    fn angle(&mut self) -> Result<Item> {
        let offset = self.pos;
        self.bump();
        let Some(len) = self.src[self.pos..].find('>') else {
            return Err(PatternSyntaxError::Unclosed { open: '<', offset });
        };
        let text = &self.src[self.pos..self.pos + len];
        self.pos += len + 1;
        let kind = if text == WILDCARD {
            NodeKind::Set(ComponentSet::any())
        } else {
            NodeKind::Literal(decode(text))
        };
        Ok(self.singleton(kind))
    }

    /// Literal written without angle brackets.
    fn bare(&mut self) -> Item {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| !c.is_whitespace() && !STRUCTURAL.contains(&c))
        {
            self.bump();
        }
        let text = &self.src[start..self.pos];
        self.singleton(NodeKind::Literal(decode(text)))
    }

    fn singleton(&mut self, kind: NodeKind) -> Item {
        Item {
            node: self.node(kind),
            singleton: true,
            quantified: false,
        }
    }

    /// `[...]` or `[^...]`: a component set or a group.
    fn bracket(&mut self) -> Result<Item> {
        let offset = self.pos;
        self.bump();
        let negated = self.peek() == Some('^');
        if negated {
            self.bump();
        }
        let items = self.items(Some(offset))?;
        if items.is_empty() {
            return Err(PatternSyntaxError::EmptySet { offset });
        }

        if items.iter().all(|item| item.singleton) {
            let members = items.into_iter().filter_map(|item| set_member(item.node)).collect();
            let node = self.node(NodeKind::Set(ComponentSet::new(members, negated)));
            return Ok(Item {
                node,
                singleton: false,
                quantified: false,
            });
        }

        if negated {
            return Err(PatternSyntaxError::NegatedGroup { offset });
        }
        let children = items.into_iter().map(|item| item.node).collect();
        let node = self.node(NodeKind::Sequence(Sequence::new(children)));
        Ok(Item {
            node,
            singleton: false,
            quantified: false,
        })
    }

    /// Parse a quantifier into a repetition range.
    fn quantifier(&mut self) -> Result<(usize, Option<usize>)> {
        let offset = self.pos;
        match self.bump() {
            Some('?') => return Ok((0, Some(1))),
            Some('*') => return Ok((0, None)),
            Some('+') => return Ok((1, None)),
            _ => {}
        }

        let Some(len) = self.src[self.pos..].find('}') else {
            return Err(PatternSyntaxError::Unclosed { open: '{', offset });
        };
        let body = &self.src[self.pos..self.pos + len];
        self.pos += len + 1;

        let unrecognized = || PatternSyntaxError::UnrecognizedQuantifier {
            text: format!("{{{}}}", body),
            offset,
        };
        let number = |s: &str| -> Result<usize> {
            let s = s.trim();
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(unrecognized());
            }
            s.parse().map_err(|_| unrecognized())
        };

        let (min, max) = match body.split_once(',') {
            None => {
                let n = number(body)?;
                (n, Some(n))
            }
            Some((lo, hi)) if lo.trim().is_empty() => (0, Some(number(hi)?)),
            Some((lo, hi)) if hi.trim().is_empty() => (number(lo)?, None),
            Some((lo, hi)) => (number(lo)?, Some(number(hi)?)),
        };
        if let Some(max) = max
            && min > max
        {
            return Err(PatternSyntaxError::EmptyRange { min, max, offset });
        }
        Ok((min, max))
    }
}

fn decode(text: &str) -> Component {
    Component::new(percent_decode_str(text).collect::<Vec<u8>>())
}

fn set_member(node: Node) -> Option<SetMember> {
    match node.kind() {
        NodeKind::Literal(value) => Some(SetMember::Literal(value.clone())),
        NodeKind::Set(set) if set.is_wildcard() => Some(SetMember::Any),
        _ => None,
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
