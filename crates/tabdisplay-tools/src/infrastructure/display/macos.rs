//! macOS primary display size via Core Graphics.

use super::{validate_size, DisplayError, PrimaryDisplayProbe};
use tabdisplay_core::DisplaySize;

use core_graphics::display::CGDisplay;

/// macOS implementation of [`PrimaryDisplayProbe`] using `CGMainDisplayID`.
#[derive(Default)]
pub struct MacosDisplayProbe;

impl MacosDisplayProbe {
    pub fn new() -> Self {
        Self
    }
}

impl PrimaryDisplayProbe for MacosDisplayProbe {
    fn primary_size(&self) -> Result<DisplaySize, DisplayError> {
        let main = CGDisplay::main();
        let width = i64::try_from(main.pixels_wide()).unwrap_or(i64::MAX);
        let height = i64::try_from(main.pixels_high()).unwrap_or(i64::MAX);
        validate_size(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macos_display_probe_returns_nonzero_size() {
        let size = MacosDisplayProbe::new().primary_size().expect("primary size");
        assert!(size.width > 0);
        assert!(size.height > 0);
    }
}
