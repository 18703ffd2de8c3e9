//! Integration tests for the serialisable settings types and the public
//! report API, exercised the way `tabdisplay-tools` uses them.

use tabdisplay_core::{
    render_checklist, render_desktop_report, CheckReport, CheckStep, DisplaySize, ExtendedDesktop,
    HostDetails, StepOutcome, TabletProfile, TetheringMatcher,
};

#[test]
fn test_tablet_profile_missing_fields_use_defaults() {
    let tablet: TabletProfile = toml::from_str("width = 2000").expect("parse");
    assert_eq!(tablet.width, 2000);
    assert_eq!(tablet.height, 2800);
}

#[test]
fn test_empty_tablet_table_is_default_profile() {
    let tablet: TabletProfile = toml::from_str("").expect("parse");
    assert_eq!(tablet, TabletProfile::default());
}

#[test]
fn test_host_details_partial_table_keeps_other_defaults() {
    let host: HostDetails = toml::from_str(r#"image_name = "TabHost.exe""#).expect("parse");
    assert_eq!(host.image_name, "TabHost.exe");
    assert_eq!(host.log_path, HostDetails::default().log_path);
    assert_eq!(host.build_dir, HostDetails::default().build_dir);
}

#[test]
fn test_custom_tablet_drives_whole_desktop_report() {
    // Arrange
    let tablet: TabletProfile = toml::from_str("width = 1600\nheight = 2560").expect("parse");

    // Act
    let desktop = ExtendedDesktop::plan(DisplaySize::new(1920, 1080), tablet).expect("plan");
    let report = render_desktop_report(&desktop);

    // Assert
    assert!(report.contains("Extended desktop area: 3520 x 2560"));
    assert!(report.contains("capture the region: 1920, 0, 1600, 2560"));
}

#[test]
fn test_checklist_with_custom_markers_reports_vendor_interface() {
    // Arrange
    let matcher = TetheringMatcher::new(["galaxy"]);
    let listing = "Wi-Fi            {192.168.1.20}\nGalaxy S21       {10.42.0.12}\n";
    let mut report = CheckReport::new();
    report.record(CheckStep::HostProcess, StepOutcome::HostRunning);
    report.record(
        CheckStep::TetheringInterfaces,
        StepOutcome::InterfacesFound(matcher.matching_interfaces(listing)),
    );

    // Act
    let text = render_checklist(&report, &HostDetails::default());

    // Assert
    assert!(text.contains("Galaxy S21       {10.42.0.12}"));
    assert!(text.contains("↳ Galaxy S21: tablet usually answers on 10.42.0.1"));
    assert!(!text.contains("Wi-Fi            {192.168.1.20}"));
}
