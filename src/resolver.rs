//! Breakpoint resolution against the current settings.

use indexmap::IndexMap;
use once_cell::unsync::OnceCell;

use crate::breakpoint::{default_config, Breakpoint, BreakpointConfig, BreakpointName};
use crate::settings::{SettingsProvider, BREAKPOINTS_SELECT_CONTROL_ID};

/// Resolves the enabled breakpoint set and its derived views.
///
/// A resolver merges the shipped defaults with whatever the settings provider
/// has saved, and caches the result for its own lifetime. Construct one per
/// request: settings can change between requests, so a resolver must not
/// outlive the settings snapshot it was built against.
///
/// # Example
///
/// ```rust
/// use breakpoints::{BreakpointName, BreakpointResolver, MemorySettings};
///
/// let settings = MemorySettings::new()
///     .select([
///         BreakpointName::Mobile,
///         BreakpointName::Tablet,
///         BreakpointName::Laptop,
///     ])
///     .value(BreakpointName::Tablet, 900);
///
/// let resolver = BreakpointResolver::new(settings);
/// assert_eq!(resolver.config().len(), 3);
/// assert!(resolver.has_custom_breakpoints());
///
/// // Lower bounds for media-query generation: each enabled breakpoint maps
/// // to the value of the one below it.
/// let minimums = resolver.active_breakpoints_with_previous_values();
/// assert_eq!(minimums[&BreakpointName::Tablet], 767);
/// assert_eq!(minimums[&BreakpointName::Laptop], 900);
/// ```
pub struct BreakpointResolver<P> {
    provider: P,
    breakpoints: OnceCell<IndexMap<BreakpointName, Breakpoint>>,
    config: OnceCell<IndexMap<BreakpointName, BreakpointConfig>>,
}

impl<P: SettingsProvider> BreakpointResolver<P> {
    /// Creates a resolver over the given settings provider.
    ///
    /// Nothing is read until the first accessor call.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            breakpoints: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    /// Returns every breakpoint instance — enabled and disabled — in
    /// canonical order.
    ///
    /// The first call queries the settings provider once and caches the
    /// result; later calls observe the same data even if the provider's
    /// answer has changed since.
    pub fn breakpoints(&self) -> &IndexMap<BreakpointName, Breakpoint> {
        self.breakpoints.get_or_init(|| self.init_breakpoints())
    }

    /// Returns a single breakpoint instance, enabled or not.
    pub fn breakpoint(&self, name: BreakpointName) -> Option<&Breakpoint> {
        self.breakpoints().get(&name)
    }

    /// Returns the config views of the *enabled* breakpoints, in canonical
    /// order. Cached for the resolver's lifetime.
    pub fn config(&self) -> &IndexMap<BreakpointName, BreakpointConfig> {
        self.config.get_or_init(|| {
            self.breakpoints()
                .values()
                .filter(|breakpoint| breakpoint.is_enabled())
                .map(|breakpoint| (breakpoint.name(), breakpoint.config()))
                .collect()
        })
    }

    /// Returns the config view for one breakpoint, or `None` if it is not
    /// enabled.
    pub fn config_for(&self, name: BreakpointName) -> Option<&BreakpointConfig> {
        self.config().get(&name)
    }

    /// Maps each enabled breakpoint to the value of the breakpoint below it.
    ///
    /// CSS generation uses this to compute `min-width` boundaries. The lowest
    /// enabled breakpoint is excluded — its minimum is an implicit 0. The
    /// rule is positional, not tied to mobile: when mobile is disabled,
    /// whichever breakpoint is now lowest is the one excluded.
    ///
    /// Every key in the returned map is also a key of [`config`].
    ///
    /// [`config`]: BreakpointResolver::config
    pub fn active_breakpoints_with_previous_values(&self) -> IndexMap<BreakpointName, u32> {
        let mut previous_values = IndexMap::new();
        let mut previous = None;

        for (name, config) in self.config() {
            if let Some(value) = previous {
                previous_values.insert(*name, value);
            }
            previous = Some(config.value);
        }

        previous_values
    }

    /// Whether any breakpoint has been customized away from its default.
    pub fn has_custom_breakpoints(&self) -> bool {
        self.breakpoints().values().any(Breakpoint::is_custom)
    }

    fn init_breakpoints(&self) -> IndexMap<BreakpointName, Breakpoint> {
        // An empty saved selection means the same as no selection at all.
        let selection = self
            .provider
            .current_settings(BREAKPOINTS_SELECT_CONTROL_ID)
            .filter(|selection| !selection.options.is_empty());

        default_config()
            .into_iter()
            .map(|(name, definition)| {
                let stored = self.provider.breakpoint_value(name);
                let breakpoint = match &selection {
                    // Sites saved before the selection control existed keep
                    // mobile and tablet enabled, at their default values.
                    None if matches!(name, BreakpointName::Mobile | BreakpointName::Tablet) => {
                        Breakpoint::new(name, &definition, definition.default_value, true)
                    }
                    None => Breakpoint::new(
                        name,
                        &definition,
                        stored.unwrap_or(definition.default_value),
                        false,
                    ),
                    Some(selection) => Breakpoint::new(
                        name,
                        &definition,
                        stored.unwrap_or(definition.default_value),
                        selection.options.contains(&name),
                    ),
                };
                (name, breakpoint)
            })
            .collect()
    }
}
