//! Shorthand definitions for the registry.
//!
//! A shorthand is described by its longhand names and the strategy used to
//! distribute its values over them. Component strategies also declare the
//! value categories each component accepts.

use std::fmt;

/// Physical box sides, in CSS order.
pub const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// Keywords accepted as border and outline widths.
pub const WIDTH_KEYWORDS: &[&str] = &["thin", "medium", "thick"];

/// Border and outline line styles.
pub const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// `list-style-position` keywords.
pub const LIST_POSITIONS: &[&str] = &["inside", "outside"];

/// `list-style-type` keywords.
pub const LIST_TYPES: &[&str] = &[
    "disc",
    "circle",
    "square",
    "decimal",
    "decimal-leading-zero",
    "lower-roman",
    "upper-roman",
    "lower-greek",
    "lower-latin",
    "upper-latin",
    "armenian",
    "georgian",
    "lower-alpha",
    "upper-alpha",
    "none",
];

/// A semantic class of values a component slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A length, or the number zero. Dimensions with other units (`90deg`,
    /// `2s`) are not lengths.
    Length,
    /// A keyword from a fixed set.
    KeywordSet(&'static [&'static str]),
    /// A colour, or the keyword `invert`.
    Color,
    /// A `url()` call, or the keyword `none`.
    UrlOrNone,
}

/// One independently typed slot of a component shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Component name, also the longhand suffix: `width`, `style`, `color`.
    pub name: &'static str,
    /// Categories the slot accepts; a value matching any of them fits.
    pub accepts: &'static [Category],
}

impl Component {
    pub const fn new(name: &'static str, accepts: &'static [Category]) -> Self {
        Self { name, accepts }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Width, style and colour of a border side or outline.
pub const BORDER_COMPONENTS: &[Component] = &[
    Component::new("width", &[Category::Length, Category::KeywordSet(WIDTH_KEYWORDS)]),
    Component::new("style", &[Category::KeywordSet(BORDER_STYLES)]),
    Component::new("color", &[Category::Color]),
];

/// Position, image and type of a list marker, in dispatch priority order.
pub const LIST_STYLE_COMPONENTS: &[Component] = &[
    Component::new("position", &[Category::KeywordSet(LIST_POSITIONS)]),
    Component::new("image", &[Category::UrlOrNone]),
    Component::new("type", &[Category::KeywordSet(LIST_TYPES)]),
];

/// How a shorthand distributes its values over its longhands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One to four values spread over top, right, bottom, left.
    FourSides,
    /// Unordered, type-sniffed components, one longhand each.
    ComponentSet(&'static [Component]),
    /// A component set replicated over the four sides.
    SideFanOut(&'static [Component]),
    /// Keyword-like components matched in priority order.
    KeywordDispatch(&'static [Component]),
}

impl Strategy {
    /// Short name for listings.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FourSides => "four-sides",
            Strategy::ComponentSet(_) => "component-set",
            Strategy::SideFanOut(_) => "side-fan-out",
            Strategy::KeywordDispatch(_) => "keyword-dispatch",
        }
    }

    /// The declared components, empty for positional strategies.
    pub fn components(&self) -> &'static [Component] {
        match self {
            Strategy::FourSides => &[],
            Strategy::ComponentSet(c) | Strategy::SideFanOut(c) | Strategy::KeywordDispatch(c) => *c,
        }
    }

    /// Number of longhands this strategy writes.
    pub fn longhand_count(&self) -> usize {
        match self {
            Strategy::FourSides => SIDES.len(),
            Strategy::ComponentSet(c) | Strategy::KeywordDispatch(c) => c.len(),
            Strategy::SideFanOut(c) => SIDES.len() * c.len(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A shorthand property and the longhands it sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shorthand {
    pub name: String,
    /// Longhand names in emission order.
    ///
    /// For four-sides shorthands this is top, right, bottom, left. For
    /// component strategies it follows the component order, and for a side
    /// fan-out it is side-major: every component of `top`, then `right`...
    pub longhands: Vec<String>,
    pub strategy: Strategy,
}

impl Shorthand {
    /// A four-sides shorthand whose longhands are `pattern` with `{side}`
    /// replaced by each side.
    ///
    /// `Shorthand::four_sides("border-width", "border-{side}-width")`
    pub fn four_sides(name: impl Into<String>, pattern: &str) -> Self {
        Self {
            name: name.into(),
            longhands: SIDES.iter().map(|side| pattern.replace("{side}", side)).collect(),
            strategy: Strategy::FourSides,
        }
    }

    /// A component shorthand with longhands `{name}-{component}`.
    pub fn component_set(name: impl Into<String>, components: &'static [Component]) -> Self {
        Self::with_components(name, components, Strategy::ComponentSet(components))
    }

    /// A keyword-dispatch shorthand with longhands `{name}-{component}`.
    pub fn keyword_dispatch(name: impl Into<String>, components: &'static [Component]) -> Self {
        Self::with_components(name, components, Strategy::KeywordDispatch(components))
    }

    /// A component set fanned out to `{name}-{side}-{component}`.
    pub fn side_fan_out(name: impl Into<String>, components: &'static [Component]) -> Self {
        let name = name.into();
        let mut longhands = Vec::with_capacity(SIDES.len() * components.len());
        for side in SIDES {
            for component in components {
                longhands.push(format!("{}-{}-{}", name, side, component.name));
            }
        }
        Self {
            name,
            longhands,
            strategy: Strategy::SideFanOut(components),
        }
    }

    fn with_components(
        name: impl Into<String>,
        components: &'static [Component],
        strategy: Strategy,
    ) -> Self {
        let name = name.into();
        let longhands = components
            .iter()
            .map(|c| format!("{}-{}", name, c.name))
            .collect();
        Self {
            name,
            longhands,
            strategy,
        }
    }

    /// Check whether a longhand belongs to this shorthand.
    pub fn sets(&self, longhand: &str) -> bool {
        self.longhands.iter().any(|l| l == longhand)
    }
}
