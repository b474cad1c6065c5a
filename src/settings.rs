//! Settings provider contract for stored breakpoint selections.
//!
//! The resolver never talks to storage directly. It reads through
//! [`SettingsProvider`], which any settings backend can implement; an
//! in-memory [`MemorySettings`] is included for tests and examples.

use std::collections::{HashMap, HashSet};

use crate::breakpoint::BreakpointName;

/// Control id the resolver queries for the enabled-breakpoint selection.
pub const BREAKPOINTS_SELECT_CONTROL_ID: &str = "active_breakpoints";

/// Prefix for per-breakpoint pixel-value keys in settings storage.
pub const BREAKPOINT_OPTION_PREFIX: &str = "viewport_";

/// Returns the storage key under which a breakpoint's pixel value is saved,
/// e.g. `viewport_tablet`.
pub fn breakpoint_option_key(name: BreakpointName) -> String {
    format!("{BREAKPOINT_OPTION_PREFIX}{}", name.key())
}

/// The saved enabled-breakpoint selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveBreakpoints {
    /// Names the user has enabled.
    pub options: HashSet<BreakpointName>,
}

impl ActiveBreakpoints {
    /// Builds a selection from an iterator of names.
    pub fn new(names: impl IntoIterator<Item = BreakpointName>) -> Self {
        Self {
            options: names.into_iter().collect(),
        }
    }
}

/// External settings store the resolver reads from.
///
/// Implementations must return `None` from [`current_settings`] when the
/// breakpoint selection was never saved — that is what triggers the
/// backward-compatible mobile/tablet default. An empty selection is treated
/// the same as `None` by the resolver.
///
/// [`current_settings`]: SettingsProvider::current_settings
pub trait SettingsProvider {
    /// Returns the saved selection for the given control, or `None` if the
    /// feature was never configured.
    fn current_settings(&self, control_id: &str) -> Option<ActiveBreakpoints>;

    /// Returns the stored pixel override for one breakpoint, if any.
    fn breakpoint_value(&self, name: BreakpointName) -> Option<u32>;
}

/// In-memory settings provider.
///
/// Useful in tests and anywhere settings are assembled programmatically
/// rather than read from a persistent store.
///
/// # Example
///
/// ```rust
/// use breakpoints::{BreakpointName, MemorySettings, SettingsProvider};
///
/// let settings = MemorySettings::new()
///     .select([BreakpointName::Mobile, BreakpointName::Laptop])
///     .value(BreakpointName::Laptop, 1500);
///
/// assert_eq!(settings.breakpoint_value(BreakpointName::Laptop), Some(1500));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    selection: Option<ActiveBreakpoints>,
    values: HashMap<BreakpointName, u32>,
}

impl MemorySettings {
    /// Creates a provider with nothing saved, as on a site that never
    /// configured breakpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the enabled-breakpoint selection, returning an updated provider
    /// for chaining.
    pub fn select(mut self, names: impl IntoIterator<Item = BreakpointName>) -> Self {
        self.selection = Some(ActiveBreakpoints::new(names));
        self
    }

    /// Saves a pixel override for one breakpoint, returning an updated
    /// provider for chaining.
    pub fn value(mut self, name: BreakpointName, pixels: u32) -> Self {
        self.values.insert(name, pixels);
        self
    }
}

impl SettingsProvider for MemorySettings {
    fn current_settings(&self, control_id: &str) -> Option<ActiveBreakpoints> {
        if control_id != BREAKPOINTS_SELECT_CONTROL_ID {
            return None;
        }
        self.selection.clone()
    }

    fn breakpoint_value(&self, name: BreakpointName) -> Option<u32> {
        self.values.get(&name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_provider_has_no_settings() {
        let settings = MemorySettings::new();
        assert_eq!(settings.current_settings(BREAKPOINTS_SELECT_CONTROL_ID), None);
        assert_eq!(settings.breakpoint_value(BreakpointName::Mobile), None);
    }

    #[test]
    fn test_select_round_trips() {
        let settings = MemorySettings::new().select([BreakpointName::Tablet]);
        let saved = settings
            .current_settings(BREAKPOINTS_SELECT_CONTROL_ID)
            .unwrap();
        assert!(saved.options.contains(&BreakpointName::Tablet));
        assert!(!saved.options.contains(&BreakpointName::Mobile));
    }

    #[test]
    fn test_unknown_control_id() {
        let settings = MemorySettings::new().select([BreakpointName::Tablet]);
        assert_eq!(settings.current_settings("page_title"), None);
    }

    #[test]
    fn test_option_key_prefix() {
        assert_eq!(
            breakpoint_option_key(BreakpointName::MobileExtra),
            "viewport_mobile_extra"
        );
    }
}
