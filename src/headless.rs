//! Headless mode: one scan, JSON on stdout, no terminal UI.
//!
//! Useful for scripting and for checking the scan service without a TTY:
//! ```bash
//! lanscope --headless --server http://192.168.1.5:5050 | jq .devices
//! ```

use lanscope_app::Settings;
use lanscope_core::prelude::*;
use lanscope_scan::ScanClient;

/// Run one scan against the configured server and print the result.
///
/// Errors propagate to the caller so the process exits non-zero on a
/// failed scan.
pub async fn run(settings: &Settings) -> Result<()> {
    let client = ScanClient::new(&settings.server.url, settings.server.timeout())?;

    info!("headless scan via {}", client.scan_url());
    let result = client.scan().await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
