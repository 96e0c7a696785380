//! Detail side panel
//!
//! Shows the four identity fields of one selected device. The panel slides
//! in from the right edge; closing slides it out without clearing the
//! content, so reopening simply overwrites it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use lanscope_core::Device;

use crate::theme::{palette, styles, IconSet};

/// Side panel with the full fields of one device
pub struct DetailPanel<'a> {
    device: &'a Device,
    icons: IconSet,
}

impl<'a> DetailPanel<'a> {
    pub fn new(device: &'a Device, icons: IconSet) -> Self {
        Self { device, icons }
    }

    fn field(label: &str, value: Span<'static>) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!(" {label:<13}"), styles::text_muted()),
            value,
        ])
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} Device Details ", self.icons.pin());
        let block = styles::panel_block(true)
            .title(Span::styled(title, styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let category_span = Span::styled(
            self.device.category.label().to_string(),
            styles::category(&self.device.category),
        );

        let lines = vec![
            Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    self.icons.category(&self.device.category).to_string(),
                    styles::category(&self.device.category),
                ),
                Span::raw(" "),
                Span::styled(self.device.hostname.clone(), styles::text_primary()),
            ]),
            Line::default(),
            Self::field("IP Address", Span::styled(self.device.ip.clone(), styles::text_primary())),
            Self::field("MAC Address", Span::styled(self.device.mac.clone(), styles::text_secondary())),
            Self::field("Hostname", Span::styled(self.device.hostname.clone(), styles::text_primary())),
            Self::field("Category", category_span),
            Line::default(),
            Line::from(vec![
                Span::styled(" [", styles::text_muted()),
                Span::styled("Esc", styles::keybinding()),
                Span::styled("] Close", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
