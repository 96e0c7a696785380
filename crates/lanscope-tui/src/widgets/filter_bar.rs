//! Category filter bar
//!
//! One entry per filter option with its device count; the active filter is
//! highlighted. Switching filters is a pure re-render over cached state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use lanscope_app::state::CategoryFilter;

use crate::theme::styles;

/// Filter bar listing every category filter with device counts
pub struct FilterBar<'a> {
    counts: &'a [(CategoryFilter, usize)],
    active: &'a CategoryFilter,
}

impl<'a> FilterBar<'a> {
    pub fn new(counts: &'a [(CategoryFilter, usize)], active: &'a CategoryFilter) -> Self {
        Self { counts, active }
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, (option, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", styles::text_muted()));
            }
            let text = format!(" {} ({count}) ", option.label());
            let style = if option == self.active {
                styles::selected_highlight()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(text, style));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
