//! Message handler (Update in TEA pattern)
//!
//! `update` is a pure state transition: it mutates [`AppState`] and returns
//! the side effect the runner must perform, if any. All network I/O stays
//! outside this function so it can be tested without a server or terminal.

use tracing::debug;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Side effect requested by an update, executed by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Spawn a scan request against the configured server
    StartScan,
}

/// Process one message (Update function in TEA)
pub fn update(state: &mut AppState, message: Message) -> Option<Task> {
    match message {
        Message::Key(key) => handle_key(state, key),
        Message::Tick => {
            state.on_tick();
            None
        }
        Message::ScanCompleted(result) => {
            debug!(devices = result.devices.len(), "scan completed");
            state.apply_scan_result(result);
            None
        }
        Message::ScanFailed { error } => {
            debug!("scan failed: {error}");
            state.apply_scan_failure(error);
            None
        }
        Message::Quit => {
            state.request_quit();
            None
        }
    }
}

fn handle_key(state: &mut AppState, key: InputKey) -> Option<Task> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => {
            state.request_quit();
            None
        }

        // Scan trigger; a no-op while a scan is in flight
        InputKey::Char('s') | InputKey::Char('r') => {
            if state.begin_scan() {
                Some(Task::StartScan)
            } else {
                debug!("scan already in flight, ignoring trigger");
                None
            }
        }

        // List navigation
        InputKey::Up | InputKey::Char('k') => {
            state.select_prev();
            None
        }
        InputKey::Down | InputKey::Char('j') => {
            state.select_next();
            None
        }
        InputKey::Home => {
            state.select_first();
            None
        }
        InputKey::End => {
            state.select_last();
            None
        }

        // Category filter cycling (pure re-render, no network)
        InputKey::Right | InputKey::Char('f') => {
            state.cycle_filter_next();
            None
        }
        InputKey::Left => {
            state.cycle_filter_prev();
            None
        }

        // Detail panel
        InputKey::Enter => {
            state.open_detail();
            None
        }
        InputKey::Esc => {
            if state.detail.is_open() {
                state.detail.close();
            }
            None
        }

        _ => None,
    }
}
