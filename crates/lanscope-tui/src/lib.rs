//! lanscope-tui - Terminal UI for lanscope
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! widget rendering (View in TEA), and the main event loop. State and update
//! logic live in lanscope-app; this crate only reads state and draws it.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
