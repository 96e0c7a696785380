//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: entry point that owns the terminal and the message channel
//! - `run_loop`: main event loop processing terminal events and completed
//!   scan tasks through the single unified message channel

use tokio::sync::mpsc;

use lanscope_app::handler::{update, Task};
use lanscope_app::message::Message;
use lanscope_app::state::AppState;
use lanscope_app::{actions, Settings};
use lanscope_core::prelude::*;
use lanscope_scan::ScanClient;

use super::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::new(settings);

    // Unified message channel: completed scan tasks land here
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Optionally kick off a scan right away
    if state.settings.behavior.auto_scan && state.begin_scan() {
        info!("auto-scan on startup");
        start_scan(&mut state, &msg_tx);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process completed scan tasks (non-blocking)
        while let Ok(message) = msg_rx.try_recv() {
            process_message(state, message, &msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (50ms poll doubles as the tick source)
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx);
        }
    }

    Ok(())
}

/// Run one update and execute whatever side effect it requests
fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    if let Some(task) = update(state, message) {
        match task {
            Task::StartScan => start_scan(state, msg_tx),
        }
    }
}

/// Spawn the scan task for the configured server.
///
/// A client build failure (bad server URL) lands in the same failed-scan
/// state as a network error, so the in-flight flag is always released.
fn start_scan(state: &mut AppState, msg_tx: &mpsc::Sender<Message>) {
    match ScanClient::new(&state.settings.server.url, state.settings.server.timeout()) {
        Ok(client) => actions::spawn_scan(client, msg_tx.clone()),
        Err(e) => {
            error!("cannot start scan: {e}");
            state.apply_scan_failure(e.to_string());
        }
    }
}
