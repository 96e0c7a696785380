//! lanscope-app - Application state and orchestration for lanscope
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the Model, [`Message`] the event type, and
//! [`handler::update`] the Update function. Rendering lives in lanscope-tui;
//! nothing in this crate touches the terminal or performs network I/O
//! directly (scans are spawned through [`actions`]).

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use config::{load_settings, IconMode, Settings};
pub use handler::{update, Task};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, CategoryFilter, DetailPanelState, ScanSummary};
