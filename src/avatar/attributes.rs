//! Open attribute set forwarded verbatim to a rendered element.

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

/// Errors raised while building an [`Attributes`] set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AttributeError {
    /// Attribute name was empty.
    #[error("attribute name cannot be empty")]
    EmptyName,
    /// Attribute name contains characters HTML does not allow in names.
    #[error("invalid attribute name: {0:?}")]
    InvalidName(String),
}

/// Returns `true` when `name` is a valid HTML attribute name.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<')
        })
}

/// Insertion-ordered attribute map.
///
/// Names are unique; inserting an existing name replaces its value in place.
/// Values are stored raw and escaped at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an attribute, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>, AttributeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AttributeError::EmptyName);
        }
        if !is_valid_name(&name) {
            return Err(AttributeError::InvalidName(name));
        }

        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            return Ok(Some(std::mem::replace(existing, value)));
        }
        self.entries.push((name, value));
        Ok(None)
    }

    /// Builder form of [`Attributes::insert`].
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, AttributeError> {
        self.insert(name, value)?;
        Ok(self)
    }

    /// Parses `name=value` (or a bare `name` for boolean attributes) and
    /// inserts it.
    pub fn insert_pair(&mut self, pair: &str) -> Result<(), AttributeError> {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        self.insert(name.trim(), value)?;
        Ok(())
    }

    /// Looks up an attribute by exact name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Removes every attribute whose name matches ASCII case-insensitively,
    /// returning the last removed value.
    pub fn remove_ignore_case(&mut self, name: &str) -> Option<String> {
        let mut removed = None;
        self.entries.retain_mut(|(n, v)| {
            if n.eq_ignore_ascii_case(name) {
                removed = Some(std::mem::take(v));
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Capability of a forwarded property set.
///
/// The open set may carry keys that the composing component owns: a style
/// override under `class` and the part marker under `data-slot`. Composition
/// takes both out before the rest is forwarded.
pub trait Passthrough {
    /// Removes and returns a style override carried in the open set.
    fn take_class(&mut self) -> Option<String> {
        None
    }

    /// Removes and returns a marker carried in the open set.
    fn take_marker(&mut self) -> Option<String> {
        None
    }
}

impl Passthrough for () {}

impl Passthrough for Attributes {
    fn take_class(&mut self) -> Option<String> {
        self.remove_ignore_case("class")
    }

    fn take_marker(&mut self) -> Option<String> {
        self.remove_ignore_case("data-slot")
    }
}
