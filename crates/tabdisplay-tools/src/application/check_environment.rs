//! EnvironmentCheck: runs the host and network probes and records outcomes.
//!
//! Each probe is one external command, attempted exactly once.  An invocation
//! failure is caught at the step boundary, recorded as
//! [`StepOutcome::Failed`], and the run moves on.  The one exception is a
//! host that is confirmed missing: with `stop_when_host_missing` set the run
//! halts there, because the network checks are only meaningful once the host
//! is up.

use tabdisplay_core::{
    detect_host, CheckReport, CheckStep, HostPresence, StepOutcome, TetheringMatcher,
    DEFAULT_HOST_IMAGE, DEFAULT_TETHERING_MARKERS,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// The external queries the checker can make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// Process list filtered by image name.
    HostProcess { image_name: String },
    /// Network configuration, pre-filtered where the platform supports it.
    TetheringInterfaces,
    /// Full network configuration.
    AllInterfaces,
}

/// Error type for external command invocation.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The child process could not be started.
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs an external query and returns its captured standard output.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Runs the command behind `probe` to completion.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] if the command cannot be invoked.  A command
    /// that runs but exits non-zero is not an error.
    fn run(&self, probe: &Probe) -> Result<String, CommandError>;
}

/// Settings for one checker run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    /// Executable image name looked up in the process list.
    pub image_name: String,
    /// Substrings that mark a tethering interface.
    pub tethering_markers: Vec<String>,
    /// Halt after step 1 when the host is not running.
    pub stop_when_host_missing: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            image_name: DEFAULT_HOST_IMAGE.to_string(),
            tethering_markers: DEFAULT_TETHERING_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            stop_when_host_missing: true,
        }
    }
}

/// The environment checker use case.
pub struct EnvironmentCheck<'a> {
    runner: &'a dyn CommandRunner,
    settings: CheckSettings,
    matcher: TetheringMatcher,
}

impl<'a> EnvironmentCheck<'a> {
    pub fn new(runner: &'a dyn CommandRunner, settings: CheckSettings) -> Self {
        let matcher = TetheringMatcher::new(&settings.tethering_markers);
        Self {
            runner,
            settings,
            matcher,
        }
    }

    /// Runs every step in order and returns their outcomes.
    pub fn run(&self) -> CheckReport {
        let mut report = CheckReport::new();

        let host = self.check_host();
        let missing = host == StepOutcome::HostMissing;
        report.record(CheckStep::HostProcess, host);

        if missing {
            if self.settings.stop_when_host_missing {
                warn!(image = %self.settings.image_name, "host not running; stopping checks");
                report.halt();
                return report;
            }
            report.request_summary();
        }

        report.record(CheckStep::TetheringInterfaces, self.check_tethering());
        report.record(CheckStep::AllInterfaces, self.list_interfaces());
        report
    }

    fn check_host(&self) -> StepOutcome {
        let probe = Probe::HostProcess {
            image_name: self.settings.image_name.clone(),
        };
        match self.runner.run(&probe) {
            Ok(listing) => match detect_host(&listing, &self.settings.image_name) {
                HostPresence::Running => {
                    info!(image = %self.settings.image_name, "host is running");
                    StepOutcome::HostRunning
                }
                HostPresence::NotRunning => StepOutcome::HostMissing,
            },
            Err(e) => {
                warn!("host status check failed: {e}");
                StepOutcome::Failed(e.to_string())
            }
        }
    }

    fn check_tethering(&self) -> StepOutcome {
        match self.runner.run(&Probe::TetheringInterfaces) {
            Ok(text) => {
                let found = self.matcher.matching_interfaces(&text);
                debug!(count = found.len(), "tethering interfaces matched");
                if found.is_empty() {
                    StepOutcome::NoInterfaces
                } else {
                    StepOutcome::InterfacesFound(found)
                }
            }
            Err(e) => {
                warn!("tethering interface check failed: {e}");
                StepOutcome::Failed(e.to_string())
            }
        }
    }

    fn list_interfaces(&self) -> StepOutcome {
        match self.runner.run(&Probe::AllInterfaces) {
            Ok(text) => StepOutcome::Listing(text),
            Err(e) => {
                warn!("network listing failed: {e}");
                StepOutcome::Failed(e.to_string())
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
