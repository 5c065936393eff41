//! Keyword dispatch for `list-style`.
//!
//! Values that fit exactly one component are placed first. A value that fits
//! several (`none` is both an image and a type) then takes the first open
//! slot in priority order, so `none url(a.png)` sets the type to `none`.

use crate::error::Result;
use crate::registry::{Component, Shorthand};
use crate::types::{Expansion, Value};

use super::classify::accepts;
use super::components::{duplicate, unknown_value};

/// Expand a keyword-dispatch shorthand.
///
/// `components` are in priority order.
pub fn expand_keyword_dispatch(
    shorthand: &Shorthand,
    components: &[Component],
    values: &[Value],
    important: bool,
) -> Result<Expansion> {
    let mut slots: Vec<Option<&Value>> = vec![None; components.len()];
    let mut ambiguous: Vec<(&Value, Vec<usize>)> = Vec::new();

    for value in values {
        let candidates: Vec<usize> = components
            .iter()
            .enumerate()
            .filter(|(_, c)| accepts(c, value))
            .map(|(i, _)| i)
            .collect();

        match candidates.len() {
            0 => return Err(unknown_value(shorthand, components, value)),
            1 => {
                let only = candidates[0];
                if slots[only].is_some() {
                    return Err(duplicate(shorthand, &components[only]));
                }
                slots[only] = Some(value);
            }
            _ => ambiguous.push((value, candidates)),
        }
    }

    for (value, candidates) in ambiguous {
        match candidates.iter().find(|&&i| slots[i].is_none()) {
            Some(&i) => slots[i] = Some(value),
            None => return Err(duplicate(shorthand, &components[candidates[0]])),
        }
    }

    let mut expansion = Expansion::new();
    for (longhand, slot) in shorthand.longhands.iter().zip(slots) {
        if let Some(value) = slot {
            expansion.push(longhand.clone(), vec![value.clone()], important);
        }
    }
    Ok(expansion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpandError;
    use crate::parser::parse_values;
    use crate::registry::LIST_STYLE_COMPONENTS;
    use pretty_assertions::assert_eq;

    fn expand(css: &str) -> Result<Vec<(String, String)>> {
        let shorthand = Shorthand::keyword_dispatch("list-style", LIST_STYLE_COMPONENTS);
        let values = parse_values(css).unwrap();
        expand_keyword_dispatch(&shorthand, LIST_STYLE_COMPONENTS, &values, false).map(|e| e.to_pairs())
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_single_components() {
        assert_eq!(expand("outside").unwrap(), pairs(&[("list-style-position", "outside")]));
        assert_eq!(expand("disc").unwrap(), pairs(&[("list-style-type", "disc")]));
        assert_eq!(expand("decimal").unwrap(), pairs(&[("list-style-type", "decimal")]));
        assert_eq!(
            expand("url(foo.png)").unwrap(),
            pairs(&[("list-style-image", "url(foo.png)")])
        );
    }

    #[test]
    fn test_multiple_components() {
        assert_eq!(
            expand("disc outside").unwrap(),
            pairs(&[("list-style-position", "outside"), ("list-style-type", "disc")])
        );
        assert_eq!(
            expand("inside url(dot.svg) square").unwrap(),
            pairs(&[
                ("list-style-position", "inside"),
                ("list-style-image", "url(dot.svg)"),
                ("list-style-type", "square"),
            ])
        );
    }

    #[test]
    fn test_none_prefers_image() {
        assert_eq!(expand("none").unwrap(), pairs(&[("list-style-image", "none")]));
        assert_eq!(
            expand("none none").unwrap(),
            pairs(&[("list-style-image", "none"), ("list-style-type", "none")])
        );
    }

    #[test]
    fn test_none_yields_to_url() {
        assert_eq!(
            expand("none url(a.png)").unwrap(),
            pairs(&[("list-style-image", "url(a.png)"), ("list-style-type", "none")])
        );
        assert_eq!(
            expand("square none").unwrap(),
            pairs(&[("list-style-image", "none"), ("list-style-type", "square")])
        );
    }

    #[test]
    fn test_unknown_value() {
        assert!(matches!(
            expand("red"),
            Err(ExpandError::UnknownComponentValue { .. })
        ));
        assert!(matches!(
            expand("disc 3px"),
            Err(ExpandError::UnknownComponentValue { .. })
        ));
    }

    #[test]
    fn test_duplicates() {
        assert!(matches!(
            expand("inside outside"),
            Err(ExpandError::DuplicateComponent { ref category, .. }) if category == "position"
        ));
        assert!(matches!(
            expand("none none none"),
            Err(ExpandError::DuplicateComponent { .. })
        ));
    }
}
