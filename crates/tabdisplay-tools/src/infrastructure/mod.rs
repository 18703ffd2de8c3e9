//! Infrastructure layer for the diagnostic tools.
//!
//! Contains OS-facing adapters and process-wide setup.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `tabdisplay_core`, but MUST NOT be imported by the `application` layer
//! outside of tests.
//!
//! # Sub-modules
//!
//! - **`display`** – OS-specific primary display size.  On Windows it calls
//!   `GetSystemMetrics`; on Linux it queries Xlib; on macOS it uses
//!   `CGDisplay`.  A `MockDisplayProbe` is provided for tests.
//!
//! - **`command`** – Builds the platform command line for each probe and runs
//!   it synchronously as a child process.
//!
//! - **`storage`** – Optional TOML configuration file.
//!
//! - **`logging`** – `tracing` subscriber setup.

pub mod command;
pub mod display;
pub mod logging;
pub mod storage;
