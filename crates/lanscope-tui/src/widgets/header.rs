//! Header bar widget
//!
//! Shows the app title, the configured scan server, and either the scan
//! indicator (while a scan is in flight) or the primary key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use lanscope_app::state::AppState;

use crate::theme::{palette, styles, IconSet};

/// Main header showing app title, server, and scan state
pub struct MainHeader<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn status_dot(&self) -> Span<'static> {
        let style = if self.state.scanning {
            styles::status_yellow()
        } else if self.state.scan_error.is_some() {
            styles::status_red()
        } else if self.state.has_scanned {
            styles::status_green()
        } else {
            styles::text_muted()
        };
        Span::styled(self.icons.dot(), style)
    }

    fn right_section(&self) -> Line<'static> {
        if self.state.scanning {
            Line::from(vec![
                Span::styled(self.icons.spinner(self.state.tick), styles::scanning()),
                Span::styled(" Scanning...", styles::scanning()),
                Span::raw(" "),
            ])
        } else {
            Line::from(vec![
                Span::styled("[", styles::text_muted()),
                Span::styled("s", styles::keybinding()),
                Span::styled("] Scan  ", styles::text_muted()),
                Span::styled("[", styles::text_muted()),
                Span::styled("f", styles::keybinding()),
                Span::styled("] Filter  ", styles::text_muted()),
                Span::styled("[", styles::text_muted()),
                Span::styled("q", styles::keybinding()),
                Span::styled("] Quit ", styles::text_muted()),
            ])
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Left: status dot + title + server
        let left = Line::from(vec![
            Span::raw(" "),
            self.status_dot(),
            Span::raw(" "),
            Span::styled("lanscope", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(
                self.state.settings.server.url.clone(),
                styles::text_secondary(),
            ),
        ]);
        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Right: scan indicator or key hints
        let right = self.right_section();
        let right_width = right.width() as u16;
        if right_width < inner.width {
            buf.set_line(
                inner.x + inner.width - right_width,
                inner.y,
                &right,
                right_width,
            );
        }
    }
}
