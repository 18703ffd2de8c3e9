//! TabDisplay extended desktop calculator.
//!
//! Reads the primary display size and prints where a tablet-sized virtual
//! monitor would sit to its right, plus the capture region to configure in
//! the TabDisplay host.  Nothing on the machine is changed.
//!
//! # Usage
//!
//! ```text
//! tabdisplay-desktop [OPTIONS]
//!
//! Options:
//!   --config <PATH>         Config file [env: TABDISPLAY_CONFIG]
//!   --tablet-width <PX>     Tablet width [env: TABDISPLAY_TABLET_WIDTH] [default: 1752]
//!   --tablet-height <PX>    Tablet height [env: TABDISPLAY_TABLET_HEIGHT] [default: 2800]
//!   -v, --verbose           Debug logging on stderr
//! ```
//!
//! A failure to read the display size is fatal: the error is returned from
//! `main` and nothing is printed to stdout.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use tabdisplay_core::DesktopReport;
use tabdisplay_tools::application::plan_desktop::plan_desktop;
use tabdisplay_tools::infrastructure::{
    display::NativeDisplayProbe, logging::init_logging, storage::config::load_config,
};

/// TabDisplay extended desktop calculator.
#[derive(Debug, Parser)]
#[command(
    name = "tabdisplay-desktop",
    about = "Print virtual second-monitor coordinates for TabDisplay",
    version
)]
struct Cli {
    /// Configuration file to use instead of the platform default.
    #[arg(long, env = "TABDISPLAY_CONFIG")]
    config: Option<PathBuf>,

    /// Tablet width in pixels; overrides `[tablet] width`.
    #[arg(long, env = "TABDISPLAY_TABLET_WIDTH")]
    tablet_width: Option<u32>,

    /// Tablet height in pixels; overrides `[tablet] height`.
    #[arg(long, env = "TABDISPLAY_TABLET_HEIGHT")]
    tablet_height: Option<u32>,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    let mut tablet = config.tablet;
    if let Some(width) = cli.tablet_width {
        tablet.width = width;
    }
    if let Some(height) = cli.tablet_height {
        tablet.height = height;
    }
    anyhow::ensure!(
        tablet.width > 0 && tablet.height > 0,
        "tablet size must be non-zero, got {} x {}",
        tablet.width,
        tablet.height
    );

    let probe = NativeDisplayProbe::new();
    let desktop = plan_desktop(&probe, tablet).context("failed to plan the extended desktop")?;

    print!("{}", DesktopReport::new(&desktop));
    Ok(())
}
