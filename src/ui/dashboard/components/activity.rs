//! Recent activity panel

use super::super::state::DashboardState;
use super::super::utils::{badge_span, panel_block};
use super::loading::render_panel_placeholder;
use crate::query::QueryKey;
use crate::views::ActivityView;
use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const TITLE: &str = "ACTIVITÉ RÉCENTE";

pub fn render_activity(f: &mut Frame, area: Rect, state: &DashboardState) {
    if state.store.is_loading(QueryKey::RecentActivity) {
        render_panel_placeholder(f, area, TITLE, state.tick);
        return;
    }

    let view = ActivityView::build(state.store.recent_activity(), Utc::now());
    let lines: Vec<Line> = if view.is_empty() {
        vec![Line::from(Span::styled(
            "Aucune activité récente",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        view.rows
            .iter()
            .map(|row| {
                Line::from(vec![
                    badge_span(&row.badge),
                    Span::raw(format!("  {}", row.description)),
                    Span::styled(
                        format!("  {}", row.time_ago),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(panel_block(TITLE)), area);
}
