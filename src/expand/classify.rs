//! Value classification against component categories.

use crate::registry::{Category, Component};
use crate::types::Value;

/// Test a value against a category.
pub fn classify(value: &Value, category: Category) -> bool {
    match category {
        Category::Length => is_length(value),
        Category::KeywordSet(keywords) => match value {
            Value::Keyword(k) => keywords.contains(&k.as_str()),
            _ => false,
        },
        Category::Color => is_color(value),
        Category::UrlOrNone => is_url_or_none(value),
    }
}

/// Check whether a component slot accepts a value.
pub fn accepts(component: &Component, value: &Value) -> bool {
    component
        .accepts
        .iter()
        .any(|&category| classify(value, category))
}

fn is_length(value: &Value) -> bool {
    match value {
        Value::Dimension(d) => d.is_length(),
        // Unitless zero is a valid length
        Value::Number(n) => *n == 0.0,
        Value::Percentage(_)
        | Value::Keyword(_)
        | Value::Color(_)
        | Value::String(_)
        | Value::Function(_) => false,
    }
}

fn is_color(value: &Value) -> bool {
    match value {
        Value::Color(_) => true,
        Value::Keyword(k) => k == "invert",
        Value::Number(_)
        | Value::Percentage(_)
        | Value::Dimension(_)
        | Value::String(_)
        | Value::Function(_) => false,
    }
}

fn is_url_or_none(value: &Value) -> bool {
    match value {
        Value::Function(call) => call.name == "url",
        Value::Keyword(k) => k == "none",
        Value::Number(_)
        | Value::Percentage(_)
        | Value::Dimension(_)
        | Value::Color(_)
        | Value::String(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{BORDER_STYLES, LIST_TYPES, WIDTH_KEYWORDS};
    use crate::types::FunctionCall;

    #[test]
    fn test_length() {
        assert!(classify(&Value::px(3.0), Category::Length));
        assert!(classify(&Value::dimension(2.0, "in"), Category::Length));
        assert!(classify(&Value::Number(0.0), Category::Length));
        assert!(!classify(&Value::Number(3.0), Category::Length));
        assert!(!classify(&Value::Percentage(10.0), Category::Length));
        assert!(!classify(&Value::dimension(90.0, "deg"), Category::Length));
        assert!(!classify(&Value::keyword("thin"), Category::Length));
    }

    #[test]
    fn test_keyword_set() {
        assert!(classify(&Value::keyword("thick"), Category::KeywordSet(WIDTH_KEYWORDS)));
        assert!(classify(&Value::keyword("inset"), Category::KeywordSet(BORDER_STYLES)));
        assert!(!classify(&Value::keyword("left"), Category::KeywordSet(BORDER_STYLES)));
        assert!(!classify(&Value::String("solid".to_string()), Category::KeywordSet(BORDER_STYLES)));
        assert!(classify(&Value::keyword("none"), Category::KeywordSet(LIST_TYPES)));
    }

    #[test]
    fn test_color() {
        assert!(classify(&Value::named_color("red").unwrap(), Category::Color));
        assert!(classify(&Value::keyword("invert"), Category::Color));
        assert!(!classify(&Value::keyword("dotted"), Category::Color));
        assert!(!classify(&Value::px(1.0), Category::Color));
    }

    #[test]
    fn test_url_or_none() {
        assert!(classify(&Value::url("foo.png"), Category::UrlOrNone));
        assert!(classify(&Value::keyword("none"), Category::UrlOrNone));
        let attr = Value::Function(FunctionCall::new("attr", vec![Value::keyword("src")]));
        assert!(!classify(&attr, Category::UrlOrNone));
        assert!(!classify(&Value::keyword("disc"), Category::UrlOrNone));
    }

    #[test]
    fn test_inherit_matches_nothing() {
        let inherit = Value::keyword("inherit");
        for category in [
            Category::Length,
            Category::KeywordSet(WIDTH_KEYWORDS),
            Category::KeywordSet(BORDER_STYLES),
            Category::KeywordSet(LIST_TYPES),
            Category::Color,
            Category::UrlOrNone,
        ] {
            assert!(!classify(&inherit, category), "inherit matched {:?}", category);
        }
    }
}
