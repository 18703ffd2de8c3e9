//! Linux primary display size via the X11 Xlib and XRandR APIs.
//!
//! Asks XRandR for the active monitors on the default screen of the display
//! named by `DISPLAY` and uses the one flagged primary (or the first one when
//! none is).  If XRandR reports no monitors, the whole X screen is used.

use std::os::raw::c_int;

use super::{validate_size, DisplayError, PrimaryDisplayProbe};
use tabdisplay_core::DisplaySize;

use x11::{xlib, xrandr};

/// Linux X11 implementation of [`PrimaryDisplayProbe`].
#[derive(Default)]
pub struct LinuxDisplayProbe;

impl LinuxDisplayProbe {
    pub fn new() -> Self {
        Self
    }
}

impl PrimaryDisplayProbe for LinuxDisplayProbe {
    fn primary_size(&self) -> Result<DisplaySize, DisplayError> {
        // SAFETY: a null name makes Xlib use $DISPLAY.  The returned pointer is
        // closed below and not used afterwards.
        let display = unsafe { xlib::XOpenDisplay(std::ptr::null()) };

        if display.is_null() {
            let display_env = std::env::var("DISPLAY").unwrap_or_else(|_| "<unset>".to_string());
            return Err(DisplayError::Platform(format!(
                "XOpenDisplay failed; DISPLAY={display_env}"
            )));
        }

        // SAFETY: `display` is a valid non-null pointer returned by XOpenDisplay.
        let (width, height) = unsafe {
            let screen = xlib::XDefaultScreen(display);
            let size = primary_monitor_size(display, screen).unwrap_or_else(|| {
                tracing::debug!("no XRandR monitors; using the whole X screen");
                (
                    xlib::XDisplayWidth(display, screen),
                    xlib::XDisplayHeight(display, screen),
                )
            });
            xlib::XCloseDisplay(display);
            size
        };

        validate_size(i64::from(width), i64::from(height))
    }
}

/// Size of the primary XRandR monitor on `screen`.
///
/// # Safety
///
/// `display` must be a valid, open Xlib display.
unsafe fn primary_monitor_size(
    display: *mut xlib::Display,
    screen: c_int,
) -> Option<(c_int, c_int)> {
    let root = xlib::XRootWindow(display, screen);
    let mut count: c_int = 0;
    let monitors = xrandr::XRRGetMonitors(display, root, xlib::True, &mut count);
    if monitors.is_null() {
        return None;
    }

    let size = match usize::try_from(count) {
        Ok(len) if len > 0 => {
            let list = std::slice::from_raw_parts(monitors, len);
            let chosen = list.iter().find(|m| m.primary != 0).unwrap_or(&list[0]);
            Some((chosen.width, chosen.height))
        }
        _ => None,
    };
    xrandr::XRRFreeMonitors(monitors);
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    /// If a DISPLAY is available this must succeed; otherwise a platform
    /// error is expected.
    #[test]
    fn test_primary_monitor_is_not_wider_than_the_screen() {
        // SAFETY: the display is only used inside this block and closed.
        unsafe {
            let display = xlib::XOpenDisplay(std::ptr::null());
            if display.is_null() {
                return;
            }
            let screen = xlib::XDefaultScreen(display);
            let whole = xlib::XDisplayWidth(display, screen);
            let primary = primary_monitor_size(display, screen);
            xlib::XCloseDisplay(display);

            if let Some((width, height)) = primary {
                assert!(width > 0 && height > 0);
                assert!(width <= whole);
            }
        }
    }

    #[test]
    fn test_linux_display_probe_smoke() {
        let result = LinuxDisplayProbe::new().primary_size();

        if std::env::var("DISPLAY").is_ok() {
            let size = result.expect("primary size when DISPLAY is set");
            assert!(size.width > 0 && size.height > 0);
        } else {
            assert!(result.is_err(), "must fail when DISPLAY is not set");
        }
    }
}
