//! Windows primary display size via `GetSystemMetrics`.

use super::{validate_size, DisplayError, PrimaryDisplayProbe};
use tabdisplay_core::DisplaySize;

use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

/// Windows implementation of [`PrimaryDisplayProbe`] using Win32 system metrics.
#[derive(Default)]
pub struct WindowsDisplayProbe;

impl WindowsDisplayProbe {
    pub fn new() -> Self {
        Self
    }
}

impl PrimaryDisplayProbe for WindowsDisplayProbe {
    fn primary_size(&self) -> Result<DisplaySize, DisplayError> {
        // SAFETY: GetSystemMetrics takes no pointers and has no preconditions.
        let (width, height) =
            unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
        validate_size(i64::from(width), i64::from(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Smoke-test: any interactive Windows session has a primary display.
    #[test]
    fn test_windows_display_probe_returns_nonzero_size() {
        let size = WindowsDisplayProbe::new().primary_size().expect("primary size");
        assert!(size.width > 0);
        assert!(size.height > 0);
    }
}
