//! Summary bar widget
//!
//! Shows the summary fields of the last successful scan: duration, bytes
//! sent, bytes received, plus the device count and completion time. A failed
//! scan never touches these values.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use lanscope_app::state::ScanSummary;
use lanscope_core::{format_bytes, format_seconds};

use crate::theme::styles;

/// Summary bar over the last successful scan
pub struct SummaryBar<'a> {
    summary: Option<&'a ScanSummary>,
    device_count: usize,
}

impl<'a> SummaryBar<'a> {
    pub fn new(summary: Option<&'a ScanSummary>, device_count: usize) -> Self {
        Self {
            summary,
            device_count,
        }
    }

    fn cell(label: &str, value: String) -> Vec<Span<'static>> {
        vec![
            Span::styled(format!("{label}: "), styles::text_muted()),
            Span::styled(value, styles::text_primary()),
        ]
    }
}

impl Widget for SummaryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(Span::styled(" Usage ", styles::text_muted()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (scan_time, sent, recv, completed) = match self.summary {
            Some(summary) => (
                format_seconds(summary.scan_time),
                format_bytes(summary.bytes_sent),
                format_bytes(summary.bytes_recv),
                summary.completed_at.format("%H:%M:%S").to_string(),
            ),
            None => ("—".into(), "—".into(), "—".into(), "—".into()),
        };

        let separator = || Span::styled("  │  ", styles::text_muted());

        let mut spans = vec![Span::raw(" ")];
        spans.extend(Self::cell("Scan time", scan_time));
        spans.push(separator());
        spans.extend(Self::cell("Sent", sent));
        spans.push(separator());
        spans.extend(Self::cell("Received", recv));
        spans.push(separator());
        spans.extend(Self::cell("Devices", self.device_count.to_string()));
        spans.push(separator());
        spans.extend(Self::cell("Last scan", completed));

        let line = Line::from(spans);
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}
