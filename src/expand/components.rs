//! Component-set expansion for border sides, outline and `border`.
//!
//! Each value is sniffed against the declared components and lands in the
//! first matching slot that is still open, so component order in the source
//! does not matter. Slots left open produce no longhand.

use crate::error::{ExpandError, Result};
use crate::registry::{Component, Shorthand, SIDES};
use crate::types::{Expansion, Value};

use super::classify::accepts;

/// Assign each value to a component slot.
///
/// Returns one entry per component, `None` where no value was given.
pub(crate) fn assign<'v>(
    shorthand: &Shorthand,
    components: &[Component],
    values: &'v [Value],
) -> Result<Vec<Option<&'v Value>>> {
    let mut slots: Vec<Option<&Value>> = vec![None; components.len()];

    for value in values {
        let mut filled: Option<&Component> = None;
        let mut placed = false;

        for (slot, component) in slots.iter_mut().zip(components) {
            if !accepts(component, value) {
                continue;
            }
            if slot.is_none() {
                *slot = Some(value);
                placed = true;
                break;
            }
            filled.get_or_insert(component);
        }

        if !placed {
            return Err(match filled {
                Some(component) => duplicate(shorthand, component),
                None => unknown_value(shorthand, components, value),
            });
        }
    }

    Ok(slots)
}

/// Expand a component shorthand to one longhand per given component.
pub fn expand_component_set(
    shorthand: &Shorthand,
    components: &[Component],
    values: &[Value],
    important: bool,
) -> Result<Expansion> {
    let slots = assign(shorthand, components, values)?;

    let mut expansion = Expansion::new();
    for (longhand, slot) in shorthand.longhands.iter().zip(slots) {
        if let Some(value) = slot {
            expansion.push(longhand.clone(), vec![value.clone()], important);
        }
    }
    Ok(expansion)
}

/// Expand a component shorthand and replicate it over the four sides.
///
/// Output is side-major: top, right, bottom, left, each in component order.
pub fn expand_side_fan_out(
    shorthand: &Shorthand,
    components: &[Component],
    values: &[Value],
    important: bool,
) -> Result<Expansion> {
    let slots = assign(shorthand, components, values)?;

    let mut expansion = Expansion::new();
    if components.is_empty() {
        return Ok(expansion);
    }
    let sides = shorthand.longhands.chunks_exact(components.len()).take(SIDES.len());
    for side_longhands in sides {
        for (longhand, slot) in side_longhands.iter().zip(&slots) {
            if let Some(value) = slot {
                expansion.push(longhand.clone(), vec![(*value).clone()], important);
            }
        }
    }
    Ok(expansion)
}

pub(crate) fn duplicate(shorthand: &Shorthand, component: &Component) -> ExpandError {
    ExpandError::DuplicateComponent {
        shorthand: shorthand.name.clone(),
        category: component.name.to_string(),
    }
}

pub(crate) fn unknown_value(shorthand: &Shorthand, components: &[Component], value: &Value) -> ExpandError {
    let names: Vec<&str> = components.iter().map(|c| c.name).collect();
    ExpandError::UnknownComponentValue {
        shorthand: shorthand.name.clone(),
        token: value.clone(),
        help: Some(format!(
            "'{}' takes {} values, not a {}",
            shorthand.name,
            names.join("/"),
            value.kind_name()
        )),
    }
}
