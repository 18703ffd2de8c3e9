//! PlanDesktop: reads the primary display size and plans the extended desktop.

use tabdisplay_core::{DesktopError, DisplaySize, ExtendedDesktop, TabletProfile};
use thiserror::Error;

/// Error type for primary display queries.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// The platform API call failed or returned an unusable size.
    #[error("platform error while reading primary display size: {0}")]
    Platform(String),
}

/// Error type for the whole planning use case.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error(transparent)]
    Desktop(#[from] DesktopError),
}

/// Trait for reading the primary display size on the current platform.
pub trait PrimaryDisplayProbe {
    /// Returns the size of the primary display in physical pixels.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::Platform`] if the OS cannot report the size.
    fn primary_size(&self) -> Result<DisplaySize, DisplayError>;
}

/// Reads the primary display size and plans the extended desktop.
///
/// A failed display read is not recovered from; the error is handed back to
/// the caller unchanged so the calculator exits without printing anything.
///
/// # Errors
///
/// Propagates [`DisplayError`] from the probe and [`DesktopError`] from the
/// arithmetic.
pub fn plan_desktop(
    probe: &dyn PrimaryDisplayProbe,
    tablet: TabletProfile,
) -> Result<ExtendedDesktop, PlanError> {
    let primary = probe.primary_size()?;
    tracing::info!(
        width = primary.width,
        height = primary.height,
        "primary display size"
    );
    Ok(ExtendedDesktop::plan(primary, tablet)?)
}
