//! lanscope - A terminal UI for a local network scan service
//!
//! This is the binary entry point. All logic lives in the library crates.

use clap::Parser;

use lanscope_app::config;
use lanscope_core::prelude::*;

/// lanscope - A terminal UI for a local network scan service
#[derive(Parser, Debug)]
#[command(name = "lanscope")]
#[command(about = "A terminal UI for a local network scan service", long_about = None)]
struct Args {
    /// Base URL of the scan service
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Run one scan and print the JSON result (no TUI)
    #[arg(long)]
    headless: bool,

    /// Trigger a scan immediately on startup
    #[arg(long)]
    auto_scan: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    lanscope_core::logging::init()?;

    // Config file first, CLI flags win
    let mut settings = config::load_settings();
    if let Some(server) = args.server {
        settings.server.url = server;
    }
    if args.auto_scan {
        settings.behavior.auto_scan = true;
    }

    info!("Scan server: {}", settings.server.url);

    let result = if args.headless {
        lanscope::headless::run(&settings).await
    } else {
        lanscope_tui::run(settings).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("lanscope exiting");
    result
}
