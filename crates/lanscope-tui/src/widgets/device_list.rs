//! Device list widget
//!
//! Renders one card row per device passing the active category filter, in
//! the exact order the scan service reported them. The same area doubles as
//! the scanning placeholder and the failed-scan indicator, so a failure
//! replaces the list but never the summary fields above it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use lanscope_app::state::AppState;
use lanscope_core::Device;

use crate::theme::{styles, IconSet};

// Column widths (icon cell + gap handled separately)
const ICON_COL: usize = 4;
const IP_COL: usize = 17;
const MAC_COL: usize = 20;
const HOST_COL: usize = 22;

/// Device card list with filter-aware rendering
pub struct DeviceList<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> DeviceList<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn placeholder(&self, inner: Rect, buf: &mut Buffer, lines: Vec<Line<'static>>) {
        let height = (lines.len() as u16).min(inner.height);
        let y = inner.y + inner.height.saturating_sub(height) / 2;
        let area = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height,
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn header_line() -> Line<'static> {
        let text = format!(
            "  {}{:<ip$}{:<mac$}{:<host$}{}",
            " ".repeat(ICON_COL),
            "IP",
            "MAC",
            "HOSTNAME",
            "TYPE",
            ip = IP_COL,
            mac = MAC_COL,
            host = HOST_COL,
        );
        Line::from(Span::styled(text, styles::text_muted()))
    }

    fn device_line(&self, device: &Device, selected: bool) -> Line<'static> {
        let marker = if selected { "❯ " } else { "  " };
        let icon = pad(self.icons.category(&device.category), ICON_COL);

        Line::from(vec![
            Span::styled(marker.to_string(), styles::accent_bold()),
            Span::styled(icon, styles::category(&device.category)),
            Span::styled(
                pad(&clip(&device.ip, IP_COL - 2), IP_COL),
                styles::text_primary(),
            ),
            Span::styled(
                pad(&clip(&device.mac, MAC_COL - 2), MAC_COL),
                styles::text_secondary(),
            ),
            Span::styled(
                pad(&clip(&device.hostname, HOST_COL - 2), HOST_COL),
                styles::text_primary(),
            ),
            Span::styled(
                device.category.label().to_string(),
                styles::category(&device.category),
            ),
        ])
    }
}

impl Widget for DeviceList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = self.state.visible_devices();

        let title = format!(" Devices ({}) ", visible.len());
        let block = styles::panel_block(true).title(Span::styled(title, styles::text_secondary()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // The list area doubles as the scan-state surface: in-flight and
        // failed scans replace the cards, in that priority order.
        if self.state.scanning {
            let line = Line::from(Span::styled(
                format!("{} Scanning...", self.icons.spinner(self.state.tick)),
                styles::scanning(),
            ));
            self.placeholder(inner, buf, vec![line]);
            return;
        }

        if let Some(error) = self.state.scan_error.as_deref() {
            let lines = vec![
                Line::from(Span::styled(
                    format!("{} Scan failed!", self.icons.error()),
                    styles::status_red(),
                )),
                Line::from(Span::styled(error.to_string(), styles::text_muted())),
            ];
            self.placeholder(inner, buf, lines);
            return;
        }

        if !self.state.has_scanned {
            let line = Line::from(Span::styled(
                "Press [s] to scan the local network",
                styles::text_muted(),
            ));
            self.placeholder(inner, buf, vec![line]);
            return;
        }

        if visible.is_empty() {
            let line = Line::from(Span::styled(
                "No devices in this category",
                styles::text_muted(),
            ));
            self.placeholder(inner, buf, vec![line]);
            return;
        }

        // Header row + scrolled card rows, selection kept in view
        buf.set_line(inner.x, inner.y, &Self::header_line(), inner.width);

        let rows = inner.height.saturating_sub(1) as usize;
        if rows == 0 {
            return;
        }
        let selected = self.state.selected.min(visible.len() - 1);
        let offset = if selected >= rows { selected + 1 - rows } else { 0 };

        for (row, (index, device)) in visible
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .enumerate()
        {
            let y = inner.y + 1 + row as u16;
            let is_selected = index == selected;
            let line = self.device_line(device, is_selected);
            buf.set_line(inner.x, y, &line, inner.width);
            if is_selected {
                let row_area = Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 1,
                };
                buf.set_style(row_area, styles::selected_highlight());
            }
        }
    }
}

/// Pad to a display width (emoji icons are two columns wide)
fn pad(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

/// Clip to a maximum number of display columns
fn clip(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + 1 >= max {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}
