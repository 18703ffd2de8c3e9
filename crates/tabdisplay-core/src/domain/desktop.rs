//! Extended desktop domain entity.
//!
//! The calculator works in the primary monitor's coordinate space: the
//! primary monitor is anchored at (0, 0) and an imagined tablet-sized monitor
//! is placed immediately to its right, top-aligned.  Nothing is created on
//! the machine; the numbers are printed so the user can position windows and
//! point the host's capture region at them.

use serde::Deserialize;
use thiserror::Error;

/// Assumed tablet width in pixels.
pub const DEFAULT_TABLET_WIDTH: u32 = 1752;

/// Assumed tablet height in pixels.
pub const DEFAULT_TABLET_HEIGHT: u32 = 2800;

/// Errors that can occur while planning the extended desktop.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DesktopError {
    /// `primary width + tablet width` does not fit in a `u32`.
    #[error("extended desktop width overflows: {primary_width} + {tablet_width}")]
    Overflow { primary_width: u32, tablet_width: u32 },
}

/// Size of a display in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

impl DisplaySize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The tablet the virtual monitor is sized after.
///
/// Missing fields in a config file fall back to the default tablet
/// (`1752 x 2800`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TabletProfile {
    #[serde(default = "default_tablet_width")]
    pub width: u32,
    #[serde(default = "default_tablet_height")]
    pub height: u32,
}

fn default_tablet_width() -> u32 {
    DEFAULT_TABLET_WIDTH
}

fn default_tablet_height() -> u32 {
    DEFAULT_TABLET_HEIGHT
}

impl Default for TabletProfile {
    fn default() -> Self {
        Self {
            width: DEFAULT_TABLET_WIDTH,
            height: DEFAULT_TABLET_HEIGHT,
        }
    }
}

/// A rectangle in desktop coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualRegion {
    /// X coordinate of the top-left corner.
    pub x: u32,
    /// Y coordinate of the top-left corner.
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl VirtualRegion {
    /// Returns the rightmost X coordinate (exclusive).
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Returns the bottommost Y coordinate (exclusive).
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Returns `true` if the point lies inside the region.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// The primary monitor extended by an imagined tablet-sized monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendedDesktop {
    /// Primary monitor size as reported by the OS.
    pub primary: DisplaySize,
    /// Tablet the virtual monitor is sized after.
    pub tablet: TabletProfile,
    /// `primary.width + tablet.width`.
    pub extended_width: u32,
    /// `max(primary.height, tablet.height)`.
    pub extended_height: u32,
}

impl ExtendedDesktop {
    /// Computes the extended desktop for a primary monitor and tablet.
    ///
    /// The extended width depends only on the primary width; the extended
    /// height is whichever of the two heights is taller.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::Overflow`] if the widths cannot be added.
    pub fn plan(primary: DisplaySize, tablet: TabletProfile) -> Result<Self, DesktopError> {
        let extended_width =
            primary
                .width
                .checked_add(tablet.width)
                .ok_or(DesktopError::Overflow {
                    primary_width: primary.width,
                    tablet_width: tablet.width,
                })?;
        let extended_height = primary.height.max(tablet.height);

        tracing::debug!(
            primary_width = primary.width,
            primary_height = primary.height,
            extended_width,
            extended_height,
            "planned extended desktop"
        );

        Ok(Self {
            primary,
            tablet,
            extended_width,
            extended_height,
        })
    }

    /// The primary monitor, anchored at (0, 0).
    pub fn primary_region(&self) -> VirtualRegion {
        VirtualRegion {
            x: 0,
            y: 0,
            width: self.primary.width,
            height: self.primary.height,
        }
    }

    /// The virtual second monitor: right of the primary, top-aligned, tablet sized.
    ///
    /// This is also the region the host application must be told to capture.
    pub fn virtual_region(&self) -> VirtualRegion {
        VirtualRegion {
            x: self.primary.width,
            y: 0,
            width: self.tablet.width,
            height: self.tablet.height,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
