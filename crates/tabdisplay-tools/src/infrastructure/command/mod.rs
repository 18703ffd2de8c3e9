//! External command invocation for the environment checker.
//!
//! Every [`Probe`] maps to one platform command line ([`CommandSpec`]).
//! [`SystemCommandRunner`] runs it synchronously, blocking until the child
//! exits, and hands back standard output as text.
//!
//! | Probe                 | Windows                                       | Linux                  | other Unix   |
//! |-----------------------|-----------------------------------------------|------------------------|--------------|
//! | `HostProcess`         | `tasklist /FI "IMAGENAME eq <image>"`         | `ps -A -o args=`       | same         |
//! | `TetheringInterfaces` | `Get-NetIPConfiguration` filtered by alias/IP | `ip -brief address`    | `ifconfig`   |
//! | `AllInterfaces`       | `Get-NetIPConfiguration \| Format-Table`      | `ip -brief address`    | `ifconfig`   |
//!
//! The tethering lines are matched again in `tabdisplay_core`, so the Unix
//! probes can return the unfiltered listing.  The Unix process probe prints
//! full command lines: `comm` is the kernel task name, cut to 15 bytes.

use std::process::Command;

use tracing::{debug, warn};

use crate::application::check_environment::{CommandError, CommandRunner, Probe};

/// PowerShell pipeline listing only interfaces that look like USB tethering.
#[cfg(target_os = "windows")]
const POWERSHELL_TETHERING_QUERY: &str = "Get-NetIPConfiguration | Where-Object { \
$_.InterfaceAlias -like '*USB*' -or $_.InterfaceAlias -like '*RNDIS*' -or \
$_.InterfaceAlias -like '*Android*' -or $_.IPv4Address -like '192.168.42.*' -or \
$_.IPv4Address -like '192.168.43.*' } | Format-Table InterfaceAlias, IPv4Address -AutoSize";

/// PowerShell pipeline listing every interface.
#[cfg(target_os = "windows")]
const POWERSHELL_ALL_QUERY: &str =
    "Get-NetIPConfiguration | Format-Table InterfaceAlias, IPv4Address -AutoSize";

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Builds the command line for `probe` on the current platform.
    pub fn for_probe(probe: &Probe) -> Self {
        platform_spec(probe)
    }
}

#[cfg(target_os = "windows")]
fn platform_spec(probe: &Probe) -> CommandSpec {
    match probe {
        Probe::HostProcess { image_name } => {
            let filter = format!("IMAGENAME eq {image_name}");
            CommandSpec::new("tasklist", &["/FI", filter.as_str()])
        }
        Probe::TetheringInterfaces => {
            CommandSpec::new("powershell", &["-Command", POWERSHELL_TETHERING_QUERY])
        }
        Probe::AllInterfaces => CommandSpec::new("powershell", &["-Command", POWERSHELL_ALL_QUERY]),
    }
}

#[cfg(target_os = "linux")]
fn platform_spec(probe: &Probe) -> CommandSpec {
    match probe {
        Probe::HostProcess { .. } => CommandSpec::new("ps", &["-A", "-o", "args="]),
        Probe::TetheringInterfaces | Probe::AllInterfaces => {
            CommandSpec::new("ip", &["-brief", "address", "show"])
        }
    }
}

#[cfg(not(any(target_os = "windows", target_os = "linux")))]
fn platform_spec(probe: &Probe) -> CommandSpec {
    match probe {
        Probe::HostProcess { .. } => CommandSpec::new("ps", &["-A", "-o", "args="]),
        Probe::TetheringInterfaces | Probe::AllInterfaces => CommandSpec::new("ifconfig", &[]),
    }
}

/// Runs probes as real child processes.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Runs `spec` to completion and returns its standard output.
    ///
    /// A non-zero exit status is logged and the captured output is returned
    /// anyway; `tasklist` and PowerShell both print usable text alongside a
    /// failing status.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Spawn`] if the program cannot be started.
    pub fn run_spec(&self, spec: &CommandSpec) -> Result<String, CommandError> {
        debug!(program = %spec.program, args = ?spec.args, "running command");

        let output = Command::new(&spec.program)
            .args(&spec.args)
            .output()
            .map_err(|source| CommandError::Spawn {
                program: spec.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                program = %spec.program,
                status = %output.status,
                stderr = %stderr.trim(),
                "command exited unsuccessfully"
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, probe: &Probe) -> Result<String, CommandError> {
        self.run_spec(&CommandSpec::for_probe(probe))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
