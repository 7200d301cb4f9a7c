//! Dashboard header component
//!
//! Renders the title bar and the user line

use super::super::state::DashboardState;
use super::super::utils::format_uptime;
use crate::query::QueryKey;
use crate::views::{OverviewView, ScoreView};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new(format!(
        "CHAINWATCH v{} · {}",
        env!("CARGO_PKG_VERSION"),
        state.environment
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let overview = OverviewView::build(state.store.overview());
    let score = ScoreView::build(state.store.user_score());
    let updated_at = state
        .store
        .get(QueryKey::Overview)
        .and_then(|entry| entry.last_fetched_at)
        .map(|at| at.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());
    let user_line = Line::from(vec![
        Span::styled(
            overview.greeting,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(overview.level, Style::default().fg(Color::LightBlue)),
        Span::raw("  "),
        Span::styled(
            format!("Score {}", score.score),
            Style::default().fg(Color::LightGreen),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Session {}", format_uptime(state.start_time.elapsed())),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Mis à jour {}", updated_at),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(
        Paragraph::new(user_line).alignment(Alignment::Center),
        header_chunks[1],
    );
}
