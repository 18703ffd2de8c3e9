//! Decision rules for the environment checker.
//!
//! The checker never parses OS output structurally.  Each rule is a substring
//! test over the raw text captured from a child process:
//!
//! - The host is running iff its image name appears anywhere in the process
//!   listing.
//! - A network listing line is a tethering candidate iff it contains one of a
//!   small set of markers (interface alias keywords or the private IP prefixes
//!   Android uses when sharing its connection over USB).

use std::net::Ipv4Addr;

/// Image name of the TabDisplay host application.
pub const DEFAULT_HOST_IMAGE: &str = "TabDisplay.exe";

/// Substrings that mark a network configuration line as a likely tethering
/// interface.
pub const DEFAULT_TETHERING_MARKERS: [&str; 5] =
    ["USB", "RNDIS", "Android", "192.168.42.", "192.168.43."];

/// Host octets an Android device usually answers on inside its tethering `/24`.
const GATEWAY_HOST_OCTETS: [u8; 5] = [1, 129, 161, 254, 100];

/// Suffixes Windows appends to RNDIS adapter names.
const ADAPTER_SUFFIXES: [&str; 2] = ["Remote NDIS", "USB Ethernet"];

/// Operstate column `ip -brief` prints after the interface name.
const IPROUTE2_OPERSTATES: [&str; 7] = [
    "UP",
    "DOWN",
    "UNKNOWN",
    "DORMANT",
    "LOWERLAYERDOWN",
    "NOTPRESENT",
    "TESTING",
];

/// Label used when an interface line carries no usable name.
const FALLBACK_DEVICE_LABEL: &str = "Android Device";

/// Whether the host application showed up in a process listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPresence {
    Running,
    NotRunning,
}

/// Checks a captured process listing for the host image name.
///
/// The comparison is case sensitive: `tasklist` echoes the image name exactly
/// as the executable is named on disk.
pub fn detect_host(process_listing: &str, image_name: &str) -> HostPresence {
    if !image_name.is_empty() && process_listing.contains(image_name) {
        HostPresence::Running
    } else {
        HostPresence::NotRunning
    }
}

/// A line of network configuration text that looks like a tethering interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TetheringInterface {
    /// The matched line, trimmed.
    pub line: String,
    /// A human-readable name for the device behind the interface.
    pub device_label: String,
    /// First IPv4 address found on the line, if any.
    pub ipv4: Option<Ipv4Addr>,
    /// Addresses the tablet usually answers on, derived from `ipv4`.
    pub candidate_gateways: Vec<Ipv4Addr>,
}

impl TetheringInterface {
    fn from_line(line: &str) -> Self {
        let line = line.trim();
        let ipv4 = first_ipv4(line);
        Self {
            line: line.to_string(),
            device_label: device_label(line),
            ipv4,
            candidate_gateways: ipv4.map(gateway_candidates).unwrap_or_default(),
        }
    }
}

/// Finds lines of network configuration text that match tethering markers.
///
/// Markers are compared case-insensitively, matching the `-like` operator
/// the Windows query uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TetheringMatcher {
    markers: Vec<String>,
}

impl TetheringMatcher {
    /// Creates a matcher from a list of markers.  Blank markers are ignored so
    /// that an empty string in a config file cannot match every line.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markers = markers
            .into_iter()
            .map(|m| m.as_ref().trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        Self { markers }
    }

    /// Returns `true` if `line` contains any marker.
    pub fn is_match(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.markers.iter().any(|m| lower.contains(m.as_str()))
    }

    /// Returns every non-blank line of `text` that contains a marker, in order.
    pub fn matching_interfaces(&self, text: &str) -> Vec<TetheringInterface> {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .filter(|line| self.is_match(line))
            .map(TetheringInterface::from_line)
            .inspect(|iface| tracing::debug!(line = %iface.line, "tethering candidate"))
            .collect()
    }
}

impl Default for TetheringMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_TETHERING_MARKERS)
    }
}

/// Returns the first dotted-quad IPv4 address on `line`.
///
/// Tokens are split on anything that is not a digit or a dot, so the address
/// is found inside `{192.168.42.15}` (PowerShell) as well as in
/// `192.168.42.15/24` (iproute2).
pub fn first_ipv4(line: &str) -> Option<Ipv4Addr> {
    line.split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|token| token.matches('.').count() == 3)
        .find_map(|token| token.parse().ok())
}

/// Derives a device name from an interface line.
///
/// Uses the text before the first IPv4 address, cut at the adapter suffixes
/// Windows appends to RNDIS devices.  On `ip -brief` lines only the interface
/// name is kept.
pub fn device_label(line: &str) -> String {
    let mut tokens = line.split_whitespace();
    if let (Some(ifname), Some(state)) = (tokens.next(), tokens.next()) {
        if IPROUTE2_OPERSTATES.contains(&state) {
            return ifname.to_string();
        }
    }

    let mut name = match first_ipv4(line) {
        Some(ip) => {
            let ip = ip.to_string();
            line.find(&ip).map_or(line, |pos| &line[..pos])
        }
        None => line,
    };

    for suffix in ADAPTER_SUFFIXES {
        if let Some(pos) = name.find(suffix) {
            name = &name[..pos];
        }
    }

    let name = name
        .trim_matches(|c: char| c.is_whitespace() || c == '{' || c == ':')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        FALLBACK_DEVICE_LABEL.to_string()
    } else {
        name
    }
}

/// Addresses inside the `/24` of `local` that an Android device usually
/// answers on when tethering.  `local` itself is never a candidate.
pub fn gateway_candidates(local: Ipv4Addr) -> Vec<Ipv4Addr> {
    let [a, b, c, d] = local.octets();
    GATEWAY_HOST_OCTETS
        .iter()
        .filter(|&&host| host != d)
        .map(|&host| Ipv4Addr::new(a, b, c, host))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const TASKLIST_RUNNING: &str = "\r\nImage Name                     PID Session Name        Session#    Mem Usage\r\n\
========================= ======== ================ =========== ============\r\n\
TabDisplay.exe                4242 Console                    1     48,112 K\r\n";

    const TASKLIST_EMPTY: &str =
        "INFO: No tasks are running which match the specified criteria.\r\n";

    #[test]
    fn test_detect_host_running_when_image_name_present() {
        assert_eq!(
            detect_host(TASKLIST_RUNNING, DEFAULT_HOST_IMAGE),
            HostPresence::Running
        );
    }

    #[test]
    fn test_detect_host_not_running_when_image_name_absent() {
        assert_eq!(
            detect_host(TASKLIST_EMPTY, DEFAULT_HOST_IMAGE),
            HostPresence::NotRunning
        );
    }

    #[test]
    fn test_detect_host_not_running_for_empty_listing() {
        assert_eq!(detect_host("", DEFAULT_HOST_IMAGE), HostPresence::NotRunning);
    }

    #[test]
    fn test_detect_host_never_matches_empty_image_name() {
        assert_eq!(detect_host(TASKLIST_RUNNING, ""), HostPresence::NotRunning);
    }

    #[test]
    fn test_matcher_reports_each_marker() {
        // Arrange
        let matcher = TetheringMatcher::default();

        // Act / Assert
        for line in [
            "Ethernet 3 USB",
            "Remote NDIS based Internet Sharing Device",
            "Android phone",
            "Ethernet 4   {192.168.42.15}",
            "Wi-Fi 2      {192.168.43.7}",
        ] {
            assert!(matcher.is_match(line), "expected match for {line:?}");
        }
    }

    #[test]
    fn test_matcher_is_case_insensitive() {
        let matcher = TetheringMatcher::default();
        assert!(matcher.is_match("usb0             UP             10.0.0.2/24"));
        assert!(matcher.is_match("rndis0"));
    }

    #[test]
    fn test_matcher_returns_only_matching_lines_in_order() {
        // Arrange
        let text = "InterfaceAlias  IPv4Address\n\
                    --------------  -----------\n\
                    Wi-Fi           {192.168.1.20}\n\
                    Ethernet 3      {192.168.42.15}\n\
                    \n\
                    Android USB     {192.168.43.2}\n";

        // Act
        let found = TetheringMatcher::default().matching_interfaces(text);

        // Assert
        let lines: Vec<&str> = found.iter().map(|i| i.line.as_str()).collect();
        assert_eq!(lines, ["Ethernet 3      {192.168.42.15}", "Android USB     {192.168.43.2}"]);
    }

    #[test]
    fn test_matcher_returns_empty_when_nothing_matches() {
        let text = "lo               UNKNOWN        127.0.0.1/8 ::1/128\n\
                    wlp3s0           UP             192.168.1.20/24\n";
        assert!(TetheringMatcher::default().matching_interfaces(text).is_empty());
    }

    #[test]
    fn test_matcher_ignores_blank_markers() {
        let matcher = TetheringMatcher::new(["", "   "]);
        assert!(!matcher.is_match("anything at all"));
    }

    #[test]
    fn test_first_ipv4_inside_braces_and_cidr() {
        assert_eq!(
            first_ipv4("Ethernet 3 {192.168.42.15}"),
            Some(Ipv4Addr::new(192, 168, 42, 15))
        );
        assert_eq!(
            first_ipv4("usb0 UP 192.168.42.129/24 fe80::1/64"),
            Some(Ipv4Addr::new(192, 168, 42, 129))
        );
        assert_eq!(first_ipv4("Ethernet 3"), None);
        assert_eq!(first_ipv4("version 1.2.3"), None);
    }

    #[test]
    fn test_device_label_strips_rndis_suffix() {
        assert_eq!(
            device_label("SAMSUNG Mobile USB Remote NDIS Network Device"),
            "SAMSUNG Mobile USB"
        );
    }

    #[test]
    fn test_device_label_uses_text_before_address() {
        assert_eq!(device_label("Ethernet 3      {192.168.42.15}"), "Ethernet 3");
    }

    #[test]
    fn test_device_label_keeps_interface_name_on_iproute2_lines() {
        assert_eq!(device_label("usb0             UP             192.168.42.129/24"), "usb0");
        assert_eq!(device_label("rndis0           UNKNOWN"), "rndis0");
        let found = TetheringMatcher::default()
            .matching_interfaces("enx0a1b2c3d4e5f  UP  192.168.42.129/24 fe80::1/64\n");
        assert_eq!(found[0].device_label, "enx0a1b2c3d4e5f");
    }

    #[test]
    fn test_device_label_falls_back_when_empty() {
        assert_eq!(device_label("  {192.168.42.15}"), FALLBACK_DEVICE_LABEL);
        assert_eq!(device_label("USB Ethernet"), FALLBACK_DEVICE_LABEL);
    }

    #[test]
    fn test_gateway_candidates_cover_common_hosts_and_skip_self() {
        // Arrange
        let local = Ipv4Addr::new(192, 168, 42, 129);

        // Act
        let candidates = gateway_candidates(local);

        // Assert
        assert_eq!(
            candidates,
            [
                Ipv4Addr::new(192, 168, 42, 1),
                Ipv4Addr::new(192, 168, 42, 161),
                Ipv4Addr::new(192, 168, 42, 254),
                Ipv4Addr::new(192, 168, 42, 100),
            ]
        );
    }

    #[test]
    fn test_matched_interface_carries_address_hints() {
        let found = TetheringMatcher::default().matching_interfaces("Ethernet 3 {192.168.42.15}");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].ipv4, Some(Ipv4Addr::new(192, 168, 42, 15)));
        assert_eq!(found[0].candidate_gateways.len(), 5);
        assert_eq!(found[0].device_label, "Ethernet 3");
    }
}
