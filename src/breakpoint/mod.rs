//! Breakpoint domain model.
//!
//! This module provides:
//!
//! - [`BreakpointName`]: Closed enum of the six well-known breakpoints
//! - [`Direction`]: `max-width` / `min-width` media-query direction
//! - [`BreakpointDefinition`] and [`default_config`]: The shipped defaults
//! - [`Breakpoint`] and [`BreakpointConfig`]: Resolved instances and their
//!   exported view
//!
//! Resolution itself — merging defaults with stored settings — lives in
//! [`crate::resolver`].

mod definition;
mod instance;
mod name;

pub use definition::{default_config, BreakpointDefinition};
pub use instance::{Breakpoint, BreakpointConfig};
pub use name::{BreakpointName, Direction};
