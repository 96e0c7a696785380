//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

use lanscope_app::state::AppState;

use crate::theme::{palette, IconSet};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function: it reads state and draws it, nothing
/// else. All mutation happens in the update handler.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(widgets::MainHeader::new(state, icons), areas.header);

    frame.render_widget(
        widgets::SummaryBar::new(state.summary.as_ref(), state.devices.len()),
        areas.summary,
    );

    let counts = state.filter_counts();
    frame.render_widget(widgets::FilterBar::new(&counts, &state.filter), areas.filter);

    frame.render_widget(widgets::DeviceList::new(state, icons), areas.devices);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Detail panel slides in over the right edge of the device area
    if state.detail.is_visible() {
        if let Some(device) = state.detail.device() {
            let panel_area = layout::detail_panel_area(areas.devices, state.detail.slide());
            if panel_area.width > 2 {
                frame.render_widget(Clear, panel_area);
                frame.render_widget(widgets::DetailPanel::new(device, icons), panel_area);
            }
        }
    }
}
