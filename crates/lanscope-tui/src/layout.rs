//! Screen layout definitions for the TUI

use lanscope_app::state::SLIDE_STEPS;
use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the detail panel ever gets, in columns
const DETAIL_PANEL_MAX_WIDTH: u16 = 38;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (title + scan indicator + key hints)
    pub header: Rect,

    /// Summary bar (scan time, bytes sent/received, device count)
    pub summary: Rect,

    /// Category filter bar
    pub filter: Rect,

    /// Device list area (cards / placeholder / error)
    pub devices: Rect,

    /// Bottom status line
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (bordered)
        Constraint::Length(3), // Summary bar (bordered)
        Constraint::Length(1), // Filter bar
        Constraint::Min(3),    // Device list (bordered)
        Constraint::Length(1), // Status line
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        summary: chunks[1],
        filter: chunks[2],
        devices: chunks[3],
        status: chunks[4],
    }
}

/// Area for the detail side panel at a given slide position.
///
/// The panel is anchored to the right edge of the device area and grows
/// from zero to its full width as `slide` runs `0..=SLIDE_STEPS`.
pub fn detail_panel_area(devices: Rect, slide: u8) -> Rect {
    let full_width = DETAIL_PANEL_MAX_WIDTH.min(devices.width / 2);
    let width = (u32::from(full_width) * u32::from(slide.min(SLIDE_STEPS))
        / u32::from(SLIDE_STEPS)) as u16;

    Rect {
        x: devices.x + devices.width - width,
        y: devices.y,
        width,
        height: devices.height,
    }
}
