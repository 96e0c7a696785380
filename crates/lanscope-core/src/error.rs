//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Scan Service Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid scan server URL: {url}")]
    InvalidServerUrl { url: String },

    #[error("Scan request failed: {message}")]
    ScanRequest { message: String },

    #[error("Scan service returned HTTP {status}")]
    ScanStatus { status: u16 },

    #[error("Malformed scan response: {message}")]
    ScanDecode { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn invalid_server_url(url: impl Into<String>) -> Self {
        Self::InvalidServerUrl { url: url.into() }
    }

    pub fn scan_request(message: impl Into<String>) -> Self {
        Self::ScanRequest {
            message: message.into(),
        }
    }

    pub fn scan_status(status: u16) -> Self {
        Self::ScanStatus { status }
    }

    pub fn scan_decode(message: impl Into<String>) -> Self {
        Self::ScanDecode {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this error is a failed scan attempt.
    ///
    /// The UI treats all three scan failure modes (transport, HTTP status,
    /// decode) as one "scan failed" state; the distinction exists for logs.
    pub fn is_scan_failure(&self) -> bool {
        matches!(
            self,
            Error::ScanRequest { .. } | Error::ScanStatus { .. } | Error::ScanDecode { .. }
        )
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::ScanRequest { .. }
                | Error::ScanStatus { .. }
                | Error::ScanDecode { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_) | Error::InvalidServerUrl { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::scan_request("connection refused");
        assert_eq!(err.to_string(), "Scan request failed: connection refused");

        let err = Error::scan_status(500);
        assert_eq!(err.to_string(), "Scan service returned HTTP 500");

        let err = Error::invalid_server_url("not a url");
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_scan_failures_are_one_family() {
        assert!(Error::scan_request("timeout").is_scan_failure());
        assert!(Error::scan_status(404).is_scan_failure());
        assert!(Error::scan_decode("expected value").is_scan_failure());
        assert!(!Error::ChannelClosed.is_scan_failure());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::scan_request("timeout").is_recoverable());
        assert!(Error::scan_decode("bad payload").is_recoverable());
        assert!(!Error::TerminalInit("no tty".into()).is_recoverable());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(Error::invalid_server_url("::").is_fatal());
        assert!(!Error::scan_status(503).is_fatal());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::terminal("test");
        let _ = Error::scan_request("test");
        let _ = Error::scan_status(418);
        let _ = Error::scan_decode("test");
        let _ = Error::config("test");
        let _ = Error::channel_send("test");
    }
}
