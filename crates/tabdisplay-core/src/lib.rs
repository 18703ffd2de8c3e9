//! # tabdisplay-core
//!
//! Shared library for the TabDisplay diagnostic tools containing the
//! desktop-extension arithmetic, the environment check decision rules, and
//! the text of every report the tools print.
//!
//! This crate has zero dependencies on OS APIs or child processes.  Everything
//! that touches the machine (reading display metrics, running `tasklist` or
//! `ip`) lives in `tabdisplay-tools`; this crate only sees the values and text
//! those adapters hand back.
//!
//! # Architecture overview
//!
//! TabDisplay mirrors part of a Windows desktop onto an Android tablet that is
//! connected over USB tethering.  The capture, encoding and transport live in
//! a separate host application.  The two tools built on this crate help a
//! user set that host up:
//!
//! - **`domain::desktop`** – Where an imagined tablet-sized monitor would sit
//!   to the right of the primary monitor, and how large the combined desktop
//!   becomes.
//!
//! - **`domain::environment`** – Whether a process listing shows the host
//!   running, and which lines of a network listing look like a tethering
//!   interface.
//!
//! - **`report`** – The human-readable text both tools print.

pub mod domain;
pub mod report;

pub use domain::desktop::{DesktopError, DisplaySize, ExtendedDesktop, TabletProfile, VirtualRegion};
pub use domain::environment::{
    detect_host, HostPresence, TetheringInterface, TetheringMatcher, DEFAULT_HOST_IMAGE,
    DEFAULT_TETHERING_MARKERS,
};
pub use report::checklist::{
    render_checklist, CheckReport, CheckStep, ChecklistView, HostDetails, StepOutcome,
};
pub use report::desktop::{render_desktop_report, DesktopReport};
