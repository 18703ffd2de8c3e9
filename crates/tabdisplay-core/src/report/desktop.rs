//! Text printed by the desktop-area calculator.

use std::fmt;

use crate::domain::desktop::ExtendedDesktop;

/// Display view of an [`ExtendedDesktop`] as setup instructions.
pub struct DesktopReport<'a> {
    desktop: &'a ExtendedDesktop,
}

impl<'a> DesktopReport<'a> {
    pub fn new(desktop: &'a ExtendedDesktop) -> Self {
        Self { desktop }
    }
}

/// Renders the full calculator report.
pub fn render_desktop_report(desktop: &ExtendedDesktop) -> String {
    DesktopReport::new(desktop).to_string()
}

impl fmt::Display for DesktopReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.desktop;
        let primary = d.primary_region();
        let virt = d.virtual_region();

        writeln!(f, "Current desktop size: {} x {}", d.primary.width, d.primary.height)?;
        writeln!(f, "Extended desktop area: {} x {}", d.extended_width, d.extended_height)?;
        writeln!(
            f,
            "Virtual second monitor area: {}, {} to {}, {}",
            virt.x,
            virt.y,
            virt.right(),
            virt.bottom()
        )?;
        writeln!(f)?;

        writeln!(f, "TabDisplay Extended Desktop Configuration:")?;
        writeln!(f)?;
        writeln!(
            f,
            "1. Current primary monitor: {}, {} to {}, {}",
            primary.x,
            primary.y,
            primary.right(),
            primary.bottom()
        )?;
        writeln!(
            f,
            "2. Virtual second monitor: {}, {} to {}, {}",
            virt.x,
            virt.y,
            virt.right(),
            virt.bottom()
        )?;
        writeln!(f)?;

        writeln!(f, "To use extended desktop mode:")?;
        writeln!(f, "1. Connect TabDisplay to your Android device")?;
        writeln!(
            f,
            "2. Configure TabDisplay to capture the region: {}, {}, {}, {}",
            virt.x, virt.y, virt.width, virt.height
        )?;
        writeln!(f, "3. Move windows to coordinates beyond {} on the X axis", virt.x)?;
        writeln!(f, "4. These windows will appear on your Android tablet")?;
        writeln!(f)?;

        writeln!(f, "Manual window positioning:")?;
        writeln!(f, "- Use Windows + Arrow keys to snap windows")?;
        writeln!(f, "- Drag windows to the right edge and keep dragging")?;
        writeln!(
            f,
            "- Use third-party tools like PowerToys FancyZones for easier management"
        )?;
        writeln!(f)?;

        writeln!(f, "Windows display setup (optional):")?;
        writeln!(f, "- Right-click the desktop and open Display settings")?;
        writeln!(f, "- Click 'Detect' if the tablet is not shown")?;
        writeln!(f, "- Select 'Extend these displays'")?;
        writeln!(
            f,
            "- Arrange displays so the tablet is to the right of the primary monitor"
        )
    }
}
