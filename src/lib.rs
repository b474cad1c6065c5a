//! Responsive breakpoint resolution for CSS media-query generation.
//!
//! A breakpoint is a named viewport-width threshold (mobile, tablet, laptop,
//! …) used to switch layout rules. This crate merges the shipped defaults for
//! six well-known breakpoints with a site's saved overrides — which
//! breakpoints are enabled, and at what pixel value — and derives the views a
//! CSS-generation layer consumes.
//!
//! The crate has three parts:
//!
//! - [`breakpoint`]: The domain model — names, directions, default
//!   definitions, resolved instances
//! - [`settings`]: The [`SettingsProvider`] contract the resolver reads
//!   stored selections through
//! - [`resolver`]: [`BreakpointResolver`], which merges the two and caches
//!   the result per request
//!
//! # Example
//!
//! ```rust
//! use breakpoints::{BreakpointName, BreakpointResolver, MemorySettings};
//!
//! // A site that never configured breakpoints gets mobile + tablet.
//! let resolver = BreakpointResolver::new(MemorySettings::new());
//! let config = resolver.config();
//!
//! let names: Vec<BreakpointName> = config.keys().copied().collect();
//! assert_eq!(names, vec![BreakpointName::Mobile, BreakpointName::Tablet]);
//! assert_eq!(config[&BreakpointName::Mobile].value, 767);
//! ```

pub mod breakpoint;
pub mod resolver;
pub mod settings;

pub use breakpoint::{
    default_config, Breakpoint, BreakpointConfig, BreakpointDefinition, BreakpointName, Direction,
};
pub use resolver::BreakpointResolver;
pub use settings::{
    breakpoint_option_key, ActiveBreakpoints, MemorySettings, SettingsProvider,
    BREAKPOINTS_SELECT_CONTROL_ID, BREAKPOINT_OPTION_PREFIX,
};
