//! Network status panel

use super::super::state::DashboardState;
use super::super::utils::{badge_span, panel_block, tiles_line};
use super::loading::render_panel_placeholder;
use crate::query::QueryKey;
use crate::views::NetworkView;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

const TITLE: &str = "RÉSEAU";

pub fn render_network(f: &mut Frame, area: Rect, state: &DashboardState) {
    if state.store.is_loading(QueryKey::NetworkStatus) {
        render_panel_placeholder(f, area, TITLE, state.tick);
        return;
    }

    let view = NetworkView::build(state.store.network_status());
    let lines = vec![
        Line::from(badge_span(&view.sync)),
        tiles_line(&view.blockchain),
        tiles_line(&view.mining),
        tiles_line(&view.tokens),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .block(panel_block(TITLE))
            .wrap(Wrap { trim: true }),
        area,
    );
}
