//! Resolved breakpoint instances and their exported config view.

use serde::Serialize;

use super::definition::BreakpointDefinition;
use super::name::{BreakpointName, Direction};

/// A breakpoint after resolution against the current settings.
///
/// Instances are built by [`BreakpointResolver`](crate::BreakpointResolver)
/// for every definition, enabled or not, and are immutable for the resolver's
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    name: BreakpointName,
    label: &'static str,
    value: u32,
    default_value: u32,
    direction: Direction,
    is_enabled: bool,
}

impl Breakpoint {
    pub(crate) fn new(
        name: BreakpointName,
        definition: &BreakpointDefinition,
        value: u32,
        is_enabled: bool,
    ) -> Self {
        Self {
            name,
            label: definition.label,
            value,
            default_value: definition.default_value,
            direction: definition.direction,
            is_enabled,
        }
    }

    pub fn name(&self) -> BreakpointName {
        self.name
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Effective threshold in pixels: the stored override if one exists,
    /// otherwise the shipped default.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn default_value(&self) -> u32 {
        self.default_value
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Whether this breakpoint diverges from its default.
    ///
    /// Disabled breakpoints are never custom, whatever value they carry.
    pub fn is_custom(&self) -> bool {
        self.is_enabled && self.value != self.default_value
    }

    /// Projects the instance to the view consumed by CSS generation.
    pub fn config(&self) -> BreakpointConfig {
        BreakpointConfig {
            name: self.name,
            label: self.label,
            value: self.value,
            direction: self.direction,
            is_enabled: self.is_enabled,
            is_custom: self.is_custom(),
        }
    }
}

/// Serializable projection of a resolved breakpoint.
///
/// Serializes with snake_case names and lowercase directions, matching the
/// shape the frontend config export expects:
///
/// ```rust
/// use breakpoints::{BreakpointName, BreakpointResolver, MemorySettings};
///
/// let resolver = BreakpointResolver::new(MemorySettings::new());
/// let config = resolver.config_for(BreakpointName::Mobile).unwrap();
///
/// let json = serde_json::to_value(config).unwrap();
/// assert_eq!(json["name"], "mobile");
/// assert_eq!(json["direction"], "max");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakpointConfig {
    pub name: BreakpointName,
    pub label: &'static str,
    pub value: u32,
    pub direction: Direction,
    pub is_enabled: bool,
    pub is_custom: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::definition::default_config;

    fn tablet() -> BreakpointDefinition {
        default_config()[&BreakpointName::Tablet]
    }

    #[test]
    fn test_default_value_is_not_custom() {
        let bp = Breakpoint::new(BreakpointName::Tablet, &tablet(), 1024, true);
        assert!(!bp.is_custom());
    }

    #[test]
    fn test_override_is_custom() {
        let bp = Breakpoint::new(BreakpointName::Tablet, &tablet(), 900, true);
        assert!(bp.is_custom());
        assert_eq!(bp.value(), 900);
        assert_eq!(bp.default_value(), 1024);
    }

    #[test]
    fn test_disabled_is_never_custom() {
        let bp = Breakpoint::new(BreakpointName::Tablet, &tablet(), 900, false);
        assert!(!bp.is_custom());
    }

    #[test]
    fn test_config_projection() {
        let bp = Breakpoint::new(BreakpointName::Tablet, &tablet(), 900, true);
        let config = bp.config();

        assert_eq!(config.name, BreakpointName::Tablet);
        assert_eq!(config.label, "Tablet");
        assert_eq!(config.value, 900);
        assert_eq!(config.direction, Direction::Max);
        assert!(config.is_enabled);
        assert!(config.is_custom);
    }

    #[test]
    fn test_config_serializes_snake_case() {
        let bp = Breakpoint::new(BreakpointName::Tablet, &tablet(), 1024, true);
        let json = serde_json::to_value(bp.config()).unwrap();

        assert_eq!(json["name"], "tablet");
        assert_eq!(json["direction"], "max");
        assert_eq!(json["value"], 1024);
        assert_eq!(json["is_custom"], false);
    }
}
