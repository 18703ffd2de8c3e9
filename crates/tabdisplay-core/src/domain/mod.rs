//! Domain rules for the TabDisplay diagnostics.
//!
//! This module contains pure logic with no infrastructure dependencies.  It
//! can be compiled and tested on any platform without a display or a tablet
//! attached.

/// Extended desktop arithmetic.
///
/// See [`desktop::ExtendedDesktop`] for the main type.
pub mod desktop;

/// Host process and tethering interface detection rules.
pub mod environment;
