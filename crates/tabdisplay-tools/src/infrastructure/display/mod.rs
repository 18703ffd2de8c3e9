//! Platform-specific primary display size.
//!
//! Each platform implements [`PrimaryDisplayProbe`]; the correct one is
//! selected at compile time via `#[cfg(target_os = ...)]` and re-exported as
//! `NativeDisplayProbe`:
//!
//! | Module    | OS      | API used                                    |
//! |-----------|---------|---------------------------------------------|
//! | `windows` | Windows | `GetSystemMetrics(SM_CXSCREEN/SM_CYSCREEN)` |
//! | `linux`   | Linux   | `XOpenDisplay` + `XDisplayWidth/Height`     |
//! | `macos`   | macOS   | `CGDisplay::main()`                         |
//!
//! A [`MockDisplayProbe`] is always compiled so tests on any platform can use
//! it without a physical display.

use tabdisplay_core::DisplaySize;

pub use crate::application::plan_desktop::{DisplayError, PrimaryDisplayProbe};

/// Rejects a zero-sized primary display.
///
/// Win32 reports `0` from `GetSystemMetrics` on failure instead of an error
/// code, and a headless X server can report an empty screen.
pub(crate) fn validate_size(width: i64, height: i64) -> Result<DisplaySize, DisplayError> {
    if width <= 0 || height <= 0 {
        return Err(DisplayError::Platform(format!(
            "primary display reported an unusable size {width} x {height}"
        )));
    }
    let width = u32::try_from(width)
        .map_err(|_| DisplayError::Platform(format!("display width {width} out of range")))?;
    let height = u32::try_from(height)
        .map_err(|_| DisplayError::Platform(format!("display height {height} out of range")))?;
    Ok(DisplaySize::new(width, height))
}

// ── Windows implementation ────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use windows::WindowsDisplayProbe as NativeDisplayProbe;

// ── Linux implementation ──────────────────────────────────────────────────────

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "linux")]
pub use linux::LinuxDisplayProbe as NativeDisplayProbe;

// ── macOS implementation ──────────────────────────────────────────────────────

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::MacosDisplayProbe as NativeDisplayProbe;

// ── Other platforms ───────────────────────────────────────────────────────────

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
pub use unsupported::UnsupportedDisplayProbe as NativeDisplayProbe;

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
mod unsupported {
    use super::{DisplayError, PrimaryDisplayProbe};
    use tabdisplay_core::DisplaySize;

    #[derive(Default)]
    pub struct UnsupportedDisplayProbe;

    impl UnsupportedDisplayProbe {
        pub fn new() -> Self {
            Self
        }
    }

    impl PrimaryDisplayProbe for UnsupportedDisplayProbe {
        fn primary_size(&self) -> Result<DisplaySize, DisplayError> {
            Err(DisplayError::Platform(
                "primary display size is not available on this platform".to_string(),
            ))
        }
    }
}

// ── Mock implementation (always compiled for tests) ───────────────────────────

/// A display probe that returns a fixed size or a fixed failure.
///
/// Does not make any OS calls.
pub struct MockDisplayProbe {
    result: Result<DisplaySize, String>,
}

impl MockDisplayProbe {
    /// A probe that always reports `width x height`.
    pub fn fixed(width: u32, height: u32) -> Self {
        Self {
            result: Ok(DisplaySize::new(width, height)),
        }
    }

    /// A probe that always fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
        }
    }
}

impl PrimaryDisplayProbe for MockDisplayProbe {
    fn primary_size(&self) -> Result<DisplaySize, DisplayError> {
        self.result.clone().map_err(DisplayError::Platform)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_size_accepts_positive_dimensions() {
        let size = validate_size(1920, 1080).expect("valid");
        assert_eq!(size, DisplaySize::new(1920, 1080));
    }

    #[test]
    fn test_validate_size_rejects_zero_metrics() {
        assert!(validate_size(0, 1080).is_err());
        assert!(validate_size(1920, 0).is_err());
        assert!(validate_size(-1, -1).is_err());
    }

    #[test]
    fn test_mock_probe_fixed_returns_size() {
        let probe = MockDisplayProbe::fixed(2560, 1440);
        assert_eq!(probe.primary_size().expect("size"), DisplaySize::new(2560, 1440));
    }

    #[test]
    fn test_mock_probe_failing_returns_platform_error() {
        let probe = MockDisplayProbe::failing("headless");
        let err = probe.primary_size().expect_err("must fail");
        assert_eq!(
            err.to_string(),
            "platform error while reading primary display size: headless"
        );
    }
}
