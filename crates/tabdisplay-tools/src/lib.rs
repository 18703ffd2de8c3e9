//! tabdisplay-tools library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the two binaries in `src/bin/` share the same module tree.
//!
//! # What do the tools do?
//!
//! - **`tabdisplay-desktop`** reads the primary display size and prints where
//!   a tablet-sized virtual monitor would sit to its right, plus the capture
//!   region to give the TabDisplay host.
//! - **`tabdisplay-check`** runs the process list and network configuration
//!   queries once each, reports whether the host is running and whether a USB
//!   tethering interface is visible, then prints manual testing steps.

/// Application layer: the two diagnostic use cases.
pub mod application;

/// Infrastructure layer: OS adapters, configuration and logging.
pub mod infrastructure;
