//! Shorthand registry.
//!
//! The registry maps a shorthand property name to its longhands and
//! expansion strategy. The standard CSS table is built once on first use and
//! shared read-only by every expansion.
//!
//! # Example
//!
//! ```
//! use shorthand::registry::ShorthandRegistry;
//!
//! let registry = ShorthandRegistry::standard();
//! let margin = registry.get("margin").unwrap();
//! assert_eq!(margin.longhands[0], "margin-top");
//! ```

pub mod types;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::error::{ExpandError, Result};
use crate::types::normalize_name;

pub use types::{
    Category, Component, Shorthand, Strategy, BORDER_COMPONENTS, BORDER_STYLES,
    LIST_POSITIONS, LIST_STYLE_COMPONENTS, LIST_TYPES, SIDES, WIDTH_KEYWORDS,
};

static STANDARD: LazyLock<ShorthandRegistry> =
    LazyLock::new(|| ShorthandRegistry::from_entries(standard_shorthands()));

/// The CSS 2.1 shorthands handled by the standard registry.
fn standard_shorthands() -> Vec<Shorthand> {
    let mut shorthands = vec![
        Shorthand::four_sides("margin", "margin-{side}"),
        Shorthand::four_sides("padding", "padding-{side}"),
        Shorthand::four_sides("border-width", "border-{side}-width"),
        Shorthand::four_sides("border-style", "border-{side}-style"),
        Shorthand::four_sides("border-color", "border-{side}-color"),
    ];
    for side in SIDES {
        shorthands.push(Shorthand::component_set(
            format!("border-{}", side),
            BORDER_COMPONENTS,
        ));
    }
    shorthands.push(Shorthand::component_set("outline", BORDER_COMPONENTS));
    shorthands.push(Shorthand::side_fan_out("border", BORDER_COMPONENTS));
    shorthands.push(Shorthand::keyword_dispatch("list-style", LIST_STYLE_COMPONENTS));
    shorthands
}

/// Immutable table of shorthand definitions.
///
/// Use `ShorthandRegistry::standard()` for the CSS table, or
/// `RegistryBuilder` to assemble a custom one.
#[derive(Debug)]
pub struct ShorthandRegistry {
    entries: HashMap<String, Shorthand>,
    /// Names in registration order.
    order: Vec<String>,
}

impl ShorthandRegistry {
    /// The standard CSS shorthand table.
    pub fn standard() -> &'static ShorthandRegistry {
        &STANDARD
    }

    fn from_entries(shorthands: Vec<Shorthand>) -> Self {
        let mut entries = HashMap::with_capacity(shorthands.len());
        let mut order = Vec::with_capacity(shorthands.len());
        for shorthand in shorthands {
            order.push(shorthand.name.clone());
            entries.insert(shorthand.name.clone(), shorthand);
        }
        Self { entries, order }
    }

    /// Get a shorthand by name.
    ///
    /// The name is normalized before lookup.
    pub fn get(&self, name: &str) -> Option<&Shorthand> {
        match self.entries.get(name) {
            Some(shorthand) => Some(shorthand),
            None => self.entries.get(&normalize_name(name)),
        }
    }

    /// Get a shorthand by name, failing with `UnknownShorthand`.
    pub fn lookup(&self, name: &str) -> Result<&Shorthand> {
        self.get(name).ok_or_else(|| ExpandError::UnknownShorthand {
            name: normalize_name(name),
        })
    }

    /// Get all shorthand names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// Get all shorthands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Shorthand> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    /// Get the longhands for a shorthand.
    pub fn longhands(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(|s| s.longhands.as_slice())
    }

    /// Get the number of shorthands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for constructing a ShorthandRegistry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    shorthands: Vec<Shorthand>,
}

impl RegistryBuilder {
    /// Create an empty registry builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded with the standard CSS shorthands.
    pub fn with_standard() -> Self {
        Self {
            shorthands: standard_shorthands(),
        }
    }

    /// Add a shorthand to the registry.
    pub fn add(&mut self, shorthand: Shorthand) -> &mut Self {
        self.shorthands.push(shorthand);
        self
    }

    /// Add multiple shorthands.
    pub fn add_all(&mut self, shorthands: impl IntoIterator<Item = Shorthand>) -> &mut Self {
        for shorthand in shorthands {
            self.add(shorthand);
        }
        self
    }

    /// Build the registry, checking that every definition is consistent.
    pub fn build(self) -> Result<ShorthandRegistry> {
        let mut seen = HashSet::new();

        for shorthand in &self.shorthands {
            if shorthand.name != normalize_name(&shorthand.name) || shorthand.name.is_empty() {
                return Err(invalid(shorthand, "name must be lowercase and non-empty"));
            }
            if !seen.insert(shorthand.name.as_str()) {
                return Err(invalid(shorthand, "defined more than once"));
            }
            if shorthand.longhands.len() != shorthand.strategy.longhand_count() {
                return Err(invalid(
                    shorthand,
                    &format!(
                        "{} strategy needs {} longhands, found {}",
                        shorthand.strategy,
                        shorthand.strategy.longhand_count(),
                        shorthand.longhands.len()
                    ),
                ));
            }
            if let Strategy::KeywordDispatch(components) = shorthand.strategy {
                let numeric = components
                    .iter()
                    .flat_map(|c| c.accepts)
                    .any(|c| matches!(c, Category::Length | Category::Color));
                if numeric {
                    return Err(invalid(
                        shorthand,
                        "keyword dispatch accepts only keyword and url categories",
                    ));
                }
            }
        }

        Ok(ShorthandRegistry::from_entries(self.shorthands))
    }
}

fn invalid(shorthand: &Shorthand, reason: &str) -> ExpandError {
    ExpandError::Config {
        message: format!("Invalid shorthand '{}': {}", shorthand.name, reason),
        help: Some("Check the shorthand definitions passed to RegistryBuilder".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_registry() {
        let registry = ShorthandRegistry::standard();
        assert_eq!(registry.len(), 12);
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec![
                "margin",
                "padding",
                "border-width",
                "border-style",
                "border-color",
                "border-top",
                "border-right",
                "border-bottom",
                "border-left",
                "outline",
                "border",
                "list-style",
            ]
        );
    }

    #[test]
    fn test_lookup_normalizes() {
        let registry = ShorthandRegistry::standard();
        assert!(registry.get("Margin").is_some());
        assert!(registry.get(" list-style ").is_some());
        assert!(registry.get("margin-top").is_none());
    }

    #[test]
    fn test_lookup_unknown() {
        let err = ShorthandRegistry::standard().lookup("Font").unwrap_err();
        assert!(matches!(err, ExpandError::UnknownShorthand { ref name } if name == "font"));
    }

    #[test]
    fn test_longhands() {
        let registry = ShorthandRegistry::standard();
        assert_eq!(
            registry.longhands("list-style").unwrap(),
            &["list-style-position", "list-style-image", "list-style-type"]
        );
        assert_eq!(registry.longhands("border").unwrap().len(), 12);
    }

    #[test]
    fn test_strategies() {
        let registry = ShorthandRegistry::standard();
        assert_eq!(registry.get("padding").unwrap().strategy, Strategy::FourSides);
        assert_eq!(
            registry.get("border-left").unwrap().strategy,
            Strategy::ComponentSet(BORDER_COMPONENTS)
        );
        assert_eq!(
            registry.get("border").unwrap().strategy,
            Strategy::SideFanOut(BORDER_COMPONENTS)
        );
        assert_eq!(
            registry.get("list-style").unwrap().strategy,
            Strategy::KeywordDispatch(LIST_STYLE_COMPONENTS)
        );
    }

    #[test]
    fn test_builder_custom_registry() {
        let mut builder = RegistryBuilder::new();
        builder.add_all([
            Shorthand::four_sides("inset", "{side}"),
            Shorthand::four_sides("scroll-margin", "scroll-margin-{side}"),
        ]);

        let registry = builder.build().unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.longhands("inset").unwrap(),
            &["top", "right", "bottom", "left"]
        );
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let mut builder = RegistryBuilder::with_standard();
        builder.add(Shorthand::four_sides("margin", "margin-{side}"));
        assert!(matches!(builder.build(), Err(ExpandError::Config { .. })));
    }

    #[test]
    fn test_builder_rejects_mismatched_longhands() {
        let mut shorthand = Shorthand::four_sides("padding", "padding-{side}");
        shorthand.longhands.pop();

        let mut builder = RegistryBuilder::new();
        builder.add(shorthand);
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_builder_rejects_numeric_keyword_dispatch() {
        let mut builder = RegistryBuilder::new();
        builder.add(Shorthand::keyword_dispatch("outline", BORDER_COMPONENTS));
        assert!(builder.build().is_err());
    }
}
