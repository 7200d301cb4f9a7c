//! Device fleet panel

use super::super::state::DashboardState;
use super::super::utils::{badge_span, more_line, panel_block, tiles_line};
use super::loading::render_panel_placeholder;
use crate::query::QueryKey;
use crate::views::DevicesView;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const TITLE: &str = "APPAREILS";

pub fn render_devices(f: &mut Frame, area: Rect, state: &DashboardState) {
    if state.store.is_loading(QueryKey::DevicesOverview) {
        render_panel_placeholder(f, area, TITLE, state.tick);
        return;
    }

    let view = DevicesView::build(state.store.devices_overview());
    let mut lines = vec![
        Line::from(Span::styled(
            view.total_label.clone(),
            Style::default().fg(Color::Gray),
        )),
        tiles_line(&view.tiles),
        Line::default(),
    ];
    lines.extend(view.rows.iter().map(|row| {
        Line::from(vec![
            badge_span(&row.badge),
            Span::raw("  "),
            Span::raw(row.name.clone()),
            Span::styled(
                format!("  {}", row.device_type),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }));
    lines.extend(more_line(view.more.as_deref()));

    f.render_widget(Paragraph::new(lines).block(panel_block(TITLE)), area);
}
