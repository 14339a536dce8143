// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hierarchical names.
//!
//! A [`Name`] is an ordered sequence of opaque byte-string [`Component`]s.
//! The URI form is `/comp/comp/...`, optionally prefixed with the `ndn:`
//! scheme. Components are percent-encoded; a component made only of periods
//! is written with three extra periods so that the empty component (`...`)
//! survives a round trip.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode};

/// Bytes escaped in URI form: everything except alphanumerics and `-._~`.
pub(crate) const COMPONENT_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SCHEME: &str = "ndn:";

/// Marker byte that prefixes segment-number components.
pub const SEGMENT_MARKER: u8 = 0x00;

/// Error parsing a name from its URI form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("invalid component '{component}': a component of only periods needs at least three")]
    InvalidComponent { component: String },
}

/// One opaque binary segment of a [`Name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Component(Vec<u8>);

impl Component {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Decode one URI path segment into a component.
    fn from_uri_segment(segment: &str) -> Result<Self, NameError> {
        let bytes: Vec<u8> = percent_decode_str(segment).collect();
        if !bytes.is_empty() && bytes.iter().all(|&b| b == b'.') {
            if bytes.len() < 3 {
                return Err(NameError::InvalidComponent {
                    component: segment.to_string(),
                });
            }
            return Ok(Self(bytes[3..].to_vec()));
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|&b| b == b'.') {
            f.write_str("...")?;
        }
        write!(f, "{}", percent_encode(&self.0, COMPONENT_ESCAPES))
    }
}

impl AsRef<[u8]> for Component {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl From<String> for Component {
    fn from(value: String) -> Self {
        Self(value.into_bytes())
    }
}

impl From<&[u8]> for Component {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl From<Vec<u8>> for Component {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

/// An ordered sequence of components identifying an item in a namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Name {
    components: Vec<Component>,
}

impl Name {
    /// The empty name (`/`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_components<I, C>(components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Component>,
    {
        Self {
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a name from URI form.
    ///
    /// The `ndn:` scheme is optional and empty path segments are skipped, so
    /// `ndn:///a/b/` and `/a//b` both yield the two components `a`, `b`.
    pub fn parse(uri: &str) -> Result<Self, NameError> {
        let path = uri.strip_prefix(SCHEME).unwrap_or(uri);
        let components = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(Component::from_uri_segment)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { components })
    }

    pub fn push(&mut self, component: impl Into<Component>) {
        self.components.push(component.into());
    }

    /// Append a component, returning the extended name.
    pub fn append(mut self, component: impl Into<Component>) -> Self {
        self.push(component);
        self
    }

    /// Append a segment-number component: the segment marker followed by the
    /// minimal big-endian encoding of `segment` (no bytes for zero).
    pub fn append_segment(self, segment: u64) -> Self {
        let bytes = segment.to_be_bytes();
        let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let mut value = Vec::with_capacity(1 + bytes.len() - first);
        value.push(SEGMENT_MARKER);
        value.extend_from_slice(&bytes[first..]);
        self.append(value)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Component> {
        self.components.get(index)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// The first `len` components (the whole name if `len` exceeds it).
    pub fn prefix(&self, len: usize) -> Self {
        Self {
            components: self.components[..len.min(self.len())].to_vec(),
        }
    }

    /// True if every component of `self` equals the component of `other`
    /// at the same position.
    pub fn is_prefix_of(&self, other: &Name) -> bool {
        self.len() <= other.len()
            && self
                .components
                .iter()
                .zip(&other.components)
                .all(|(a, b)| a == b)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return f.write_str("/");
        }
        for component in &self.components {
            write!(f, "/{}", component)?;
        }
        Ok(())
    }
}

impl FromStr for Name {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a Name {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
