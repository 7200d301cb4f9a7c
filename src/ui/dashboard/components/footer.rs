//! Dashboard footer component
//!
//! Renders key hints and the toast stack above them

use super::super::state::DashboardState;
use super::super::utils::log_level_color;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn toasts_height(state: &DashboardState) -> u16 {
    state.notifications.len() as u16
}

pub fn render_toasts(f: &mut Frame, area: Rect, state: &DashboardState) {
    let lines: Vec<Line> = state
        .notifications
        .visible()
        .map(|toast| {
            Line::from(Span::styled(
                format!("⚠ {}", toast.message),
                Style::default()
                    .fg(log_level_color(toast.level))
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Right), area);
}

pub fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new("[Q] Quitter | [R] Actualiser | Chainwatch Dashboard")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
