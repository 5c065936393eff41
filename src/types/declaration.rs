//! Declarations and their expanded longhands.

use std::fmt;

use serde::Serialize;

use super::value::Value;

/// A property declaration: name, values and importance.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Property name, lowercased and trimmed.
    pub name: String,
    pub values: Vec<Value>,
    pub important: bool,
}

impl Declaration {
    /// Create a declaration, normalizing the property name.
    pub fn new(name: impl AsRef<str>, values: Vec<Value>) -> Self {
        Self {
            name: normalize_name(name.as_ref()),
            values,
            important: false,
        }
    }

    /// Mark this declaration `!important`.
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, join_values(&self.values))?;
        if self.important {
            f.write_str(" !important")?;
        }
        Ok(())
    }
}

/// Normalize a property name for lookup.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Join values with single spaces.
pub fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One longhand declaration produced by an expansion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Longhand {
    pub name: String,
    pub values: Vec<Value>,
    pub important: bool,
}

impl Longhand {
    pub fn new(name: impl Into<String>, values: Vec<Value>, important: bool) -> Self {
        Self {
            name: name.into(),
            values,
            important,
        }
    }

    /// The value list as CSS text.
    pub fn value_text(&self) -> String {
        join_values(&self.values)
    }
}

impl fmt::Display for Longhand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value_text())?;
        if self.important {
            f.write_str(" !important")?;
        }
        Ok(())
    }
}

/// The ordered longhands produced from one shorthand declaration.
///
/// Longhands the shorthand did not specify are absent, never defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Expansion {
    longhands: Vec<Longhand>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: impl Into<String>, values: Vec<Value>, important: bool) {
        self.longhands.push(Longhand::new(name, values, important));
    }

    /// Values for a longhand, if the shorthand set it.
    pub fn get(&self, name: &str) -> Option<&[Value]> {
        self.longhands
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.values.as_slice())
    }

    /// Value text for a longhand, if the shorthand set it.
    pub fn get_text(&self, name: &str) -> Option<String> {
        self.get(name).map(join_values)
    }

    /// Longhand names in emission order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.longhands.iter().map(|l| l.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Longhand> {
        self.longhands.iter()
    }

    pub fn len(&self) -> usize {
        self.longhands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.longhands.is_empty()
    }

    /// `(name, value text)` pairs in emission order.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.longhands
            .iter()
            .map(|l| (l.name.clone(), l.value_text()))
            .collect()
    }
}

impl IntoIterator for Expansion {
    type Item = Longhand;
    type IntoIter = std::vec::IntoIter<Longhand>;

    fn into_iter(self) -> Self::IntoIter {
        self.longhands.into_iter()
    }
}

impl<'a> IntoIterator for &'a Expansion {
    type Item = &'a Longhand;
    type IntoIter = std::slice::Iter<'a, Longhand>;

    fn into_iter(self) -> Self::IntoIter {
        self.longhands.iter()
    }
}
