//! Color palette for the TUI.
//!
//! Named terminal colors only; anything fancier is at the mercy of the
//! user's terminal theme anyway.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Idle with data / success
pub const STATUS_RED: Color = Color::Red; // Scan failed
pub const STATUS_YELLOW: Color = Color::Yellow; // Scan in flight

// --- Scan placeholder ---
pub const SCANNING: Color = Color::Cyan;

// --- Category colors ---
pub const CATEGORY_DEVICE: Color = Color::Cyan;
pub const CATEGORY_ROUTER: Color = Color::Blue;
pub const CATEGORY_OTHER: Color = Color::Yellow;
pub const CATEGORY_UNKNOWN: Color = Color::DarkGray;
