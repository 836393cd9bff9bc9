//! Name normalization and the loosely-typed name-list extraction used on
//! model output.

use std::fmt;

use serde_json::Value;

use crate::error::{Error, Result};

/// Canonicalize arbitrary text: trim surrounding whitespace, lowercase.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// A Pokémon name, normalized at construction.
///
/// The inner String is private so every value in the system is guaranteed
/// trimmed and lowercased, which is what keys the cache and the upstream
/// catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PokemonName(String);

impl PokemonName {
    /// Create a name from arbitrary text, normalizing it.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(normalize(name.as_ref()))
    }

    /// Parse untrusted input into a name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the input is empty after trimming.
    pub fn parse(raw: &str) -> Result<Self> {
        let name = Self::new(raw);
        if name.0.is_empty() {
            return Err(Error::InvalidInput("name must not be empty".into()));
        }
        Ok(name)
    }

    /// The normalized name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PokemonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PokemonName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PokemonName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A Pokémon type name (e.g. `electric`), normalized at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName(String);

impl TypeName {
    /// Create a type name from arbitrary text, normalizing it.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(normalize(name.as_ref()))
    }

    /// The normalized type name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypeName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Whether a JSON value is an array whose elements are all strings.
///
/// Explicit shape check for the untrusted-model-output boundary; anything
/// else (objects, mixed arrays, primitives) is rejected wholesale rather
/// than coerced.
#[must_use]
pub fn is_string_sequence(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}

/// Extract a bounded, deduplicated name list from a loosely-typed value.
///
/// Yields the empty vec unless `value` is a sequence of strings. Elements
/// are normalized, empties dropped, duplicates removed (first occurrence
/// wins) and the result truncated to `max`. Never fails.
#[must_use]
pub fn extract_name_set(value: &Value, max: usize) -> Vec<String> {
    if !is_string_sequence(value) {
        return Vec::new();
    }

    let mut names: Vec<String> = Vec::new();
    for item in value.as_array().into_iter().flatten() {
        let Some(raw) = item.as_str() else { continue };
        let name = normalize(raw);
        if name.is_empty() || names.contains(&name) {
            continue;
        }
        names.push(name);
        if names.len() == max {
            break;
        }
    }
    names
}
