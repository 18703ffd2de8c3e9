//! Environment checker outcomes and the checklist printed from them.
//!
//! A checker run produces a [`CheckReport`]: the ordered outcome of each step
//! it attempted.  [`ChecklistView`] turns that report into the text the user
//! sees, including the fixed manual testing instructions.

use std::fmt;

use serde::Deserialize;

use super::RULE_WIDTH;
use crate::domain::environment::{HostPresence, TetheringInterface, DEFAULT_HOST_IMAGE};

/// Facts about the host application that appear in printed guidance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostDetails {
    /// Executable image name looked up in the process list.
    #[serde(default = "default_image_name")]
    pub image_name: String,
    /// Directory the host is started from.
    #[serde(default = "default_build_dir")]
    pub build_dir: String,
    /// Log file the host writes.  Mentioned only; never read.
    #[serde(default = "default_log_path")]
    pub log_path: String,
}

fn default_image_name() -> String {
    DEFAULT_HOST_IMAGE.to_string()
}
fn default_build_dir() -> String {
    r"host\build\vs2022-release".to_string()
}
fn default_log_path() -> String {
    r"host\TabDisplay.log".to_string()
}

impl Default for HostDetails {
    fn default() -> Self {
        Self {
            image_name: default_image_name(),
            build_dir: default_build_dir(),
            log_path: default_log_path(),
        }
    }
}

/// The checks the environment checker performs, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStep {
    /// Is the host executable in the process list?
    HostProcess,
    /// Does any network interface look like USB tethering?
    TetheringInterfaces,
    /// Full network configuration listing.
    AllInterfaces,
}

impl CheckStep {
    fn number(self) -> u8 {
        match self {
            CheckStep::HostProcess => 1,
            CheckStep::TetheringInterfaces => 2,
            CheckStep::AllInterfaces => 3,
        }
    }

    fn heading(self) -> &'static str {
        match self {
            CheckStep::HostProcess => "Checking host application status...",
            CheckStep::TetheringInterfaces => "Checking network interfaces...",
            CheckStep::AllInterfaces => "Checking all network interfaces...",
        }
    }

    fn failure_prefix(self) -> &'static str {
        match self {
            CheckStep::HostProcess => "Error checking host status",
            CheckStep::TetheringInterfaces => "Error checking network interfaces",
            CheckStep::AllInterfaces => "Error listing network interfaces",
        }
    }
}

/// What a single step observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    HostRunning,
    HostMissing,
    InterfacesFound(Vec<TetheringInterface>),
    NoInterfaces,
    /// Captured output of the full network listing.
    Listing(String),
    /// The external command could not be invoked.
    Failed(String),
}

/// Ordered outcomes of one checker run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    steps: Vec<(CheckStep, StepOutcome)>,
    halted: bool,
    summary: bool,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the outcome of a step.
    pub fn record(&mut self, step: CheckStep, outcome: StepOutcome) {
        self.steps.push((step, outcome));
    }

    /// Marks the run as stopped early; nothing after the last recorded step
    /// is printed.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Requests a summary block after the instructions.
    pub fn request_summary(&mut self) {
        self.summary = true;
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn steps(&self) -> &[(CheckStep, StepOutcome)] {
        &self.steps
    }

    /// Returns the recorded outcome for `step`, if it ran.
    pub fn outcome(&self, step: CheckStep) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, outcome)| outcome)
    }

    /// Host presence as observed by step 1.  `None` if the step failed or did
    /// not run.
    pub fn host_presence(&self) -> Option<HostPresence> {
        match self.outcome(CheckStep::HostProcess)? {
            StepOutcome::HostRunning => Some(HostPresence::Running),
            StepOutcome::HostMissing => Some(HostPresence::NotRunning),
            _ => None,
        }
    }

    /// Process exit code: `1` when the host was confirmed missing, else `0`.
    pub fn exit_code(&self) -> u8 {
        match self.host_presence() {
            Some(HostPresence::NotRunning) => 1,
            _ => 0,
        }
    }
}

/// Display view of a [`CheckReport`] as the printed checklist.
pub struct ChecklistView<'a> {
    report: &'a CheckReport,
    host: &'a HostDetails,
}

impl<'a> ChecklistView<'a> {
    pub fn new(report: &'a CheckReport, host: &'a HostDetails) -> Self {
        Self { report, host }
    }

    fn write_outcome(
        &self,
        f: &mut fmt::Formatter<'_>,
        step: CheckStep,
        outcome: &StepOutcome,
    ) -> fmt::Result {
        match outcome {
            StepOutcome::HostRunning => writeln!(
                f,
                "✅ Host application ({}) is running",
                self.host.image_name
            ),
            StepOutcome::HostMissing => {
                writeln!(f, "❌ Host application is not running")?;
                writeln!(f, "Please start the host application first:")?;
                writeln!(f, "   cd {}", self.host.build_dir)?;
                writeln!(f, r"   .\{}", self.host.image_name)
            }
            StepOutcome::InterfacesFound(interfaces) => {
                writeln!(f, "✅ Potential Android USB interfaces found:")?;
                for iface in interfaces {
                    writeln!(f, "{}", iface.line)?;
                    if !iface.candidate_gateways.is_empty() {
                        let candidates = iface
                            .candidate_gateways
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(", ");
                        writeln!(
                            f,
                            "   ↳ {}: tablet usually answers on {}",
                            iface.device_label, candidates
                        )?;
                    }
                }
                Ok(())
            }
            StepOutcome::NoInterfaces => {
                writeln!(f, "⚠️ No obvious Android USB tethering interfaces detected")?;
                writeln!(f, "Please ensure:")?;
                writeln!(f, "   - Android device is connected via USB")?;
                writeln!(f, "   - USB tethering is enabled on Android device")?;
                writeln!(f, "   - Android device appears in network interfaces")
            }
            StepOutcome::Listing(text) => {
                writeln!(f, "All network interfaces:")?;
                writeln!(f, "{}", text.trim_end())
            }
            StepOutcome::Failed(detail) => {
                writeln!(f, "❌ {}: {}", step.failure_prefix(), detail)
            }
        }
    }

    fn write_instructions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "4. Instructions for manual testing:")?;
        writeln!(f, "{}", "─".repeat(RULE_WIDTH))?;
        writeln!(f, "To test the connection:")?;
        writeln!(
            f,
            "1. Look for the TabDisplay icon in your system tray (bottom-right)"
        )?;
        writeln!(f, "2. Right-click the TabDisplay tray icon")?;
        writeln!(f, "3. Select 'Connect to Android'")?;
        writeln!(
            f,
            "4. Check the {} file for detailed logging",
            self.host.log_path
        )?;
        writeln!(
            f,
            "5. If successful, you should see discovery and connection messages"
        )?;
        writeln!(f)?;
        writeln!(f, "5. To check logs in real-time:")?;
        writeln!(f, "   tail -f {}", self.host.log_path)?;
        writeln!(f, "   (or open the file and refresh it)")
    }

    fn write_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Summary:")?;
        for (step, outcome) in self.report.steps() {
            let status = match outcome {
                StepOutcome::HostRunning => "running".to_string(),
                StepOutcome::HostMissing => "NOT running".to_string(),
                StepOutcome::InterfacesFound(list) => format!("{} found", list.len()),
                StepOutcome::NoInterfaces => "none detected".to_string(),
                StepOutcome::Listing(_) => "listed".to_string(),
                StepOutcome::Failed(_) => "check failed".to_string(),
            };
            let label = match step {
                CheckStep::HostProcess => "Host application",
                CheckStep::TetheringInterfaces => "Tethering interfaces",
                CheckStep::AllInterfaces => "Network listing",
            };
            writeln!(f, "   {label}: {status}")?;
        }
        Ok(())
    }
}

/// Renders the full checklist for `report`.
pub fn render_checklist(report: &CheckReport, host: &HostDetails) -> String {
    ChecklistView::new(report, host).to_string()
}

impl fmt::Display for ChecklistView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TabDisplay System Test")?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;

        for (step, outcome) in self.report.steps() {
            writeln!(f)?;
            writeln!(f, "{}. {}", step.number(), step.heading())?;
            self.write_outcome(f, *step, outcome)?;
        }

        if self.report.is_halted() {
            return Ok(());
        }

        self.write_instructions(f)?;
        if self.report.summary {
            self.write_summary(f)?;
        }
        writeln!(f)?;
        writeln!(f, "Test complete!")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
