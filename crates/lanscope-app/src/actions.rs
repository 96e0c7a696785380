//! Async side effects spawned by the event loop
//!
//! Tasks run on the tokio runtime and report back through the unified
//! message channel; they never touch [`crate::state::AppState`] directly.

use tokio::sync::mpsc;
use tracing::{error, warn};

use lanscope_scan::ScanClient;

use crate::message::Message;

/// Spawn one scan request; the outcome arrives as a [`Message`].
///
/// Exactly one completion message is sent per invocation, success or
/// failure -- the handler relies on this to clear the in-flight flag.
pub fn spawn_scan(client: ScanClient, tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let message = match client.scan().await {
            Ok(result) => Message::ScanCompleted(result),
            Err(e) => {
                warn!("scan failed: {e}");
                Message::ScanFailed {
                    error: e.to_string(),
                }
            }
        };

        if tx.send(message).await.is_err() {
            // Event loop already gone; nothing left to notify
            error!("scan finished but the message channel is closed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_spawn_scan_reports_failure_message() {
        // Nothing listens on this address, so the scan must fail and the
        // failure must arrive as a message rather than a panic.
        let client = ScanClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        let (tx, mut rx) = mpsc::channel(1);

        spawn_scan(client, tx);

        let message = rx.recv().await.expect("completion message");
        assert!(matches!(message, Message::ScanFailed { .. }));
    }
}
