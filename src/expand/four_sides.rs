//! Positional expansion for box shorthands.
//!
//! Values are spread over top, right, bottom and left following the CSS
//! box rule: one value sets all sides, two set vertical/horizontal, three
//! set top/horizontal/bottom and four set each side in clockwise order.

use crate::error::{ExpandError, Result};
use crate::registry::Shorthand;
use crate::types::{Expansion, Value};

/// Expand one to four values over the four side longhands.
pub fn expand_four_sides(shorthand: &Shorthand, values: &[Value], important: bool) -> Result<Expansion> {
    // Value index for each side, in top-right-bottom-left order
    let indices: [usize; 4] = match values.len() {
        1 => [0, 0, 0, 0],
        2 => [0, 1, 0, 1],
        3 => [0, 1, 2, 1],
        4 => [0, 1, 2, 3],
        count => {
            return Err(ExpandError::InvalidValueCount {
                shorthand: shorthand.name.clone(),
                count,
            })
        }
    };

    let mut expansion = Expansion::new();
    for (longhand, index) in shorthand.longhands.iter().zip(indices) {
        expansion.push(longhand.clone(), vec![values[index].clone()], important);
    }
    Ok(expansion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_values;
    use pretty_assertions::assert_eq;

    fn padding() -> Shorthand {
        Shorthand::four_sides("padding", "padding-{side}")
    }

    fn expand(css: &str) -> Result<Vec<(String, String)>> {
        let values = parse_values(css).unwrap();
        expand_four_sides(&padding(), &values, false).map(|e| e.to_pairs())
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_one_value() {
        assert_eq!(
            expand("1em").unwrap(),
            pairs(&[
                ("padding-top", "1em"),
                ("padding-right", "1em"),
                ("padding-bottom", "1em"),
                ("padding-left", "1em"),
            ])
        );
    }

    #[test]
    fn test_two_values() {
        assert_eq!(
            expand("1em 0").unwrap(),
            pairs(&[
                ("padding-top", "1em"),
                ("padding-right", "0"),
                ("padding-bottom", "1em"),
                ("padding-left", "0"),
            ])
        );
    }

    #[test]
    fn test_three_values() {
        assert_eq!(
            expand("1em 0 2em").unwrap(),
            pairs(&[
                ("padding-top", "1em"),
                ("padding-right", "0"),
                ("padding-bottom", "2em"),
                ("padding-left", "0"),
            ])
        );
    }

    #[test]
    fn test_four_values() {
        assert_eq!(
            expand("1em 0 2em 5px").unwrap(),
            pairs(&[
                ("padding-top", "1em"),
                ("padding-right", "0"),
                ("padding-bottom", "2em"),
                ("padding-left", "5px"),
            ])
        );
    }

    #[test]
    fn test_accepts_any_token() {
        let result = expand("auto 10% red").unwrap();
        assert_eq!(result[0].1, "auto");
        assert_eq!(result[1].1, "10%");
        assert_eq!(result[2].1, "red");
    }

    #[test]
    fn test_invalid_counts() {
        assert!(matches!(
            expand("1 2 3 4 5"),
            Err(ExpandError::InvalidValueCount { count: 5, .. })
        ));
        assert!(matches!(
            expand_four_sides(&padding(), &[], false),
            Err(ExpandError::InvalidValueCount { count: 0, .. })
        ));
    }

    #[test]
    fn test_important_passes_through() {
        let expansion = expand_four_sides(&padding(), &[Value::px(1.0)], true).unwrap();
        assert!(expansion.iter().all(|l| l.important));
    }
}
