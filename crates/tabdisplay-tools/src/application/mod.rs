//! Application layer use cases.
//!
//! - **`plan_desktop`** – Reads the primary display size through a
//!   [`PrimaryDisplayProbe`](plan_desktop::PrimaryDisplayProbe) and plans the
//!   extended desktop.  A failed read is fatal.
//!
//! - **`check_environment`** – Runs the three environment probes through a
//!   [`CommandRunner`](check_environment::CommandRunner), each inside its own
//!   failure boundary, and collects the outcomes into a `CheckReport`.
//!
//! Both traits are defined here and implemented in `infrastructure`, so the
//! use cases can be tested without a display or any child process.

pub mod check_environment;
pub mod plan_desktop;
