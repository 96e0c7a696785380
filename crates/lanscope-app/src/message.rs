//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use lanscope_core::ScanResult;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner, panel slide)
    Tick,

    /// A scan task finished with a decoded result
    ScanCompleted(ScanResult),

    /// A scan task failed (transport error, bad status, or bad payload --
    /// the UI does not distinguish, the logs do)
    ScanFailed { error: String },

    /// Force quit without confirmation (Ctrl+C)
    Quit,
}
