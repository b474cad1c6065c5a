//! Static default breakpoint definitions.

use indexmap::IndexMap;
use serde::Serialize;

use super::name::{BreakpointName, Direction};

/// Immutable default definition for a single breakpoint.
///
/// Definitions carry the shipped defaults; user overrides are applied later
/// by the resolver, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakpointDefinition {
    /// Human-readable label shown in settings UIs.
    pub label: &'static str,
    /// Default threshold in pixels.
    pub default_value: u32,
    /// Whether the breakpoint's media query is `max-width` or `min-width`.
    pub direction: Direction,
}

/// Returns the default definitions for all six breakpoints, in canonical order.
///
/// Pure and deterministic; every call builds a fresh map.
///
/// # Example
///
/// ```rust
/// use breakpoints::{default_config, BreakpointName};
///
/// let defaults = default_config();
/// assert_eq!(defaults[&BreakpointName::Mobile].default_value, 767);
/// assert_eq!(defaults[&BreakpointName::Widescreen].default_value, 2400);
/// ```
pub fn default_config() -> IndexMap<BreakpointName, BreakpointDefinition> {
    IndexMap::from([
        (
            BreakpointName::Mobile,
            BreakpointDefinition {
                label: "Mobile",
                default_value: 767,
                direction: Direction::Max,
            },
        ),
        (
            BreakpointName::MobileExtra,
            BreakpointDefinition {
                label: "Mobile Extra",
                default_value: 880,
                direction: Direction::Max,
            },
        ),
        (
            BreakpointName::Tablet,
            BreakpointDefinition {
                label: "Tablet",
                default_value: 1024,
                direction: Direction::Max,
            },
        ),
        (
            BreakpointName::TabletExtra,
            BreakpointDefinition {
                label: "Tablet Extra",
                default_value: 1366,
                direction: Direction::Max,
            },
        ),
        (
            BreakpointName::Laptop,
            BreakpointDefinition {
                label: "Laptop",
                default_value: 1620,
                direction: Direction::Max,
            },
        ),
        (
            BreakpointName::Widescreen,
            BreakpointDefinition {
                label: "Widescreen",
                default_value: 2400,
                direction: Direction::Min,
            },
        ),
    ])
}
