//! Dashboard logs panel component
//!
//! Renders the refresh log of every poller

use super::super::state::DashboardState;
use super::super::utils::{log_level_color, panel_block};
use crate::events::QueryOutcome;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Borders take two rows
    let log_count = (area.height.saturating_sub(2) as usize).max(1);

    let log_lines: Vec<Line> = state
        .activity_logs
        .iter()
        .filter(|event| event.should_display_at(state.log_threshold))
        .rev()
        .take(log_count)
        .map(|event| {
            let (icon, text, color) = match &event.outcome {
                QueryOutcome::Resolved(_) => ("✓", "actualisé".to_string(), Color::Green),
                QueryOutcome::Failed { message, .. } => {
                    ("✗", message.clone(), log_level_color(event.log_level))
                }
            };
            Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::styled(
                    format!("{} ", event.timestamp.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{} ", event.key), Style::default().fg(Color::Cyan)),
                Span::styled(text, Style::default().fg(color)),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("En attente des premières réponses...")])
    } else {
        Paragraph::new(log_lines)
    };

    f.render_widget(
        log_paragraph
            .block(panel_block("JOURNAL"))
            .wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::UserScore;
    use crate::environment::Environment;
    use crate::error_classifier::LogLevel;
    use crate::events::QueryEvent;
    use crate::query::Payload;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn panel_text(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|f| render_logs_panel(f, f.area(), state))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn state_with_refresh(threshold: LogLevel) -> DashboardState {
        let mut state = DashboardState::new(Environment::Local, Instant::now(), false);
        state.log_threshold = threshold;
        state.add_event(QueryEvent::resolved(Payload::UserScore(UserScore {
            total_score: 40.0,
            level: 2,
        })));
        state.update();
        state
    }

    #[test]
    fn refresh_is_listed_at_info() {
        let text = panel_text(&state_with_refresh(LogLevel::Info));
        assert!(text.contains("JOURNAL"));
        assert!(text.contains("user_score actualisé"));
    }

    #[test]
    fn refresh_is_hidden_above_info() {
        let text = panel_text(&state_with_refresh(LogLevel::Warn));
        assert!(!text.contains("actualisé"));
        assert!(text.contains("En attente des premières réponses..."));
    }
}
