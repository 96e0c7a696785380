//! Status bar widget
//!
//! Single bottom line: scan state indicator on the left, contextual key
//! hints on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use lanscope_app::state::AppState;

use crate::theme::styles;

/// Status bar showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Get the state indicator with appropriate styling
    fn state_indicator(&self) -> Span<'static> {
        if self.state.scanning {
            Span::styled("● Scanning", styles::status_yellow())
        } else if self.state.scan_error.is_some() {
            Span::styled("● Scan failed", styles::status_red())
        } else if self.state.has_scanned {
            Span::styled("● Ready", styles::status_green())
        } else {
            Span::styled("○ Idle", styles::text_muted())
        }
    }

    fn hints(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("↑↓", styles::keybinding()),
            Span::styled("] Select  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("←→", styles::keybinding()),
            Span::styled("] Filter  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled("] Details ", styles::text_muted()),
        ];
        if self.state.detail.is_open() {
            spans.extend([
                Span::styled(" [", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled("] Close ", styles::text_muted()),
            ]);
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let left = Line::from(vec![Span::raw(" "), self.state_indicator()]);
        buf.set_line(area.x, area.y, &left, area.width);

        let hints = self.hints();
        let hints_width = hints.width() as u16;
        if hints_width < area.width.saturating_sub(left.width() as u16) {
            buf.set_line(
                area.x + area.width - hints_width,
                area.y,
                &hints,
                hints_width,
            );
        }
    }
}
