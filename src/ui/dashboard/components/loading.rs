//! Loading placeholders
//!
//! Full-page spinner before the overview arrives, and per-panel
//! placeholders before a panel's first resolution

use super::super::state::DashboardState;
use super::super::utils::{panel_block, spinner_frame};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

pub const LOADING_LABEL: &str = "Chargement...";

pub fn render_page_spinner(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

    let spinner = Paragraph::new(format!("{} {}", spinner_frame(state.tick), LOADING_LABEL))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(spinner, chunks[1]);
}

pub fn render_panel_placeholder(f: &mut Frame, area: Rect, title: &str, tick: usize) {
    let placeholder = Paragraph::new(format!("{} {}", spinner_frame(tick), LOADING_LABEL))
        .style(Style::default().fg(Color::DarkGray))
        .block(panel_block(title));
    f.render_widget(placeholder, area);
}
