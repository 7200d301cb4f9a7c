//! Overview stat tiles

use super::super::state::DashboardState;
use super::super::utils::{panel_block, tiles_line};
use crate::views::OverviewView;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

pub fn render_stats(f: &mut Frame, area: Rect, state: &DashboardState) {
    let view = OverviewView::build(state.store.overview());
    let lines = vec![tiles_line(&view.tiles), tiles_line(&view.network)];
    f.render_widget(Paragraph::new(lines).block(panel_block("APERÇU")), area);
}
