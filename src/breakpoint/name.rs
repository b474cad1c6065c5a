//! Breakpoint identity and media-query direction.

use serde::{Deserialize, Serialize};

/// Identifier for one of the six well-known breakpoints.
///
/// The declaration order is the canonical order — ascending by default pixel
/// value, from `Mobile` (767px) up to `Widescreen` (2400px). Every ordered
/// view this crate produces follows it; the order is assumed, never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakpointName {
    Mobile,
    MobileExtra,
    Tablet,
    TabletExtra,
    Laptop,
    Widescreen,
}

impl BreakpointName {
    /// All breakpoint names, in canonical order.
    pub const ALL: [BreakpointName; 6] = [
        BreakpointName::Mobile,
        BreakpointName::MobileExtra,
        BreakpointName::Tablet,
        BreakpointName::TabletExtra,
        BreakpointName::Laptop,
        BreakpointName::Widescreen,
    ];

    /// The stable string key used in settings storage and exported config.
    pub fn key(self) -> &'static str {
        match self {
            BreakpointName::Mobile => "mobile",
            BreakpointName::MobileExtra => "mobile_extra",
            BreakpointName::Tablet => "tablet",
            BreakpointName::TabletExtra => "tablet_extra",
            BreakpointName::Laptop => "laptop",
            BreakpointName::Widescreen => "widescreen",
        }
    }

    /// Looks up a name by its string key.
    ///
    /// Unknown keys yield `None` rather than an error, so callers reading
    /// stored settings can skip entries they don't recognize.
    pub fn from_key(key: &str) -> Option<Self> {
        BreakpointName::ALL.into_iter().find(|name| name.key() == key)
    }
}

impl std::fmt::Display for BreakpointName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Which side of the threshold a breakpoint's media query applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `max-width`: the query applies up to the breakpoint value.
    Max,
    /// `min-width`: the query applies from the breakpoint value upward.
    Min,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let keys: Vec<&str> = BreakpointName::ALL.iter().map(|n| n.key()).collect();
        assert_eq!(
            keys,
            vec![
                "mobile",
                "mobile_extra",
                "tablet",
                "tablet_extra",
                "laptop",
                "widescreen"
            ]
        );
    }

    #[test]
    fn test_key_round_trip() {
        for name in BreakpointName::ALL {
            assert_eq!(BreakpointName::from_key(name.key()), Some(name));
        }
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(BreakpointName::from_key("desktop"), None);
        assert_eq!(BreakpointName::from_key(""), None);
        assert_eq!(BreakpointName::from_key("Mobile"), None);
    }

    #[test]
    fn test_display_matches_key() {
        assert_eq!(BreakpointName::MobileExtra.to_string(), "mobile_extra");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&BreakpointName::TabletExtra).unwrap();
        assert_eq!(json, r#""tablet_extra""#);

        let direction: Direction = serde_json::from_str(r#""max""#).unwrap();
        assert_eq!(direction, Direction::Max);
    }
}
