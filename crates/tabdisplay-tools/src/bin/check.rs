//! TabDisplay environment checker.
//!
//! Checks, once each and in order:
//!
//! 1. whether the host executable is in the process list,
//! 2. whether a network interface looks like Android USB tethering,
//! 3. the full network interface listing,
//!
//! then prints manual testing instructions.  An invocation failure in any
//! step is printed and the next step runs.  A host that is not running ends
//! the run after step 1 with exit code 1 unless `--keep-going` is given.
//!
//! # Usage
//!
//! ```text
//! tabdisplay-check [OPTIONS]
//!
//! Options:
//!   --config <PATH>       Config file [env: TABDISPLAY_CONFIG]
//!   --image-name <NAME>   Host executable [env: TABDISPLAY_HOST_IMAGE] [default: TabDisplay.exe]
//!   --keep-going         Run every check even if the host is not running
//!   -v, --verbose         Debug logging on stderr
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use tabdisplay_core::ChecklistView;
use tabdisplay_tools::application::check_environment::EnvironmentCheck;
use tabdisplay_tools::infrastructure::{
    command::SystemCommandRunner, logging::init_logging, storage::config::load_config,
};

/// TabDisplay environment checker.
#[derive(Debug, Parser)]
#[command(
    name = "tabdisplay-check",
    about = "Check that the TabDisplay host is running and a USB tethering interface is up",
    version
)]
struct Cli {
    /// Configuration file to use instead of the platform default.
    #[arg(long, env = "TABDISPLAY_CONFIG")]
    config: Option<PathBuf>,

    /// Host executable image name; overrides `[host] image_name`.
    #[arg(long, env = "TABDISPLAY_HOST_IMAGE")]
    image_name: Option<String>,

    /// Run the network checks and print a summary even when the host is not
    /// running.
    #[arg(long)]
    keep_going: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(image_name) = cli.image_name {
        config.host.image_name = image_name;
    }
    if cli.keep_going {
        config.check.stop_when_host_missing = false;
    }
    anyhow::ensure!(
        !config.host.image_name.trim().is_empty(),
        "host image name must not be empty"
    );

    let runner = SystemCommandRunner::new();
    let report = EnvironmentCheck::new(&runner, config.check_settings()).run();

    print!("{}", ChecklistView::new(&report, &config.host));
    Ok(ExitCode::from(report.exit_code()))
}
