//! Startup screen shown while the first responses come in.

use crate::query::QueryKey;
use crate::ui::dashboard::DashboardState;
use crate::ui::dashboard::utils::spinner_frame;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const WORDMARK: [&str; 3] = [
    "┏━╸╻ ╻┏━┓╻┏┓╻   ╻ ╻┏━┓╺┳╸┏━╸╻ ╻",
    "┃  ┣━┫┣━┫┃┃┗┫   ┃╻┃┣━┫ ┃ ┃  ┣━┫",
    "┗━╸╹ ╹╹ ╹╹╹ ╹   ┗┻┛╹ ╹ ╹ ┗━╸╹ ╹",
];

/// Progress line, e.g. "3/7 requêtes chargées".
pub fn progress_label(state: &DashboardState) -> String {
    format!(
        "{}/{} requêtes chargées",
        state.store.loaded_count(),
        QueryKey::ALL.len()
    )
}

pub fn render_splash(f: &mut Frame, state: &DashboardState) {
    let mut lines: Vec<Line> = WORDMARK
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                *row,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("v{} · {}", env!("CARGO_PKG_VERSION"), state.environment.api_url()),
        Style::default().fg(Color::LightBlue),
    )));
    lines.push(Line::from(Span::styled(
        format!("{} {}", spinner_frame(state.tick), progress_label(state)),
        Style::default().fg(Color::DarkGray),
    )));

    let height = lines.len() as u16;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(f.area());

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::UserScore;
    use crate::environment::Environment;
    use crate::events::QueryEvent;
    use crate::query::Payload;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    #[test]
    fn shows_backend_and_progress() {
        let mut state = DashboardState::new(Environment::Local, Instant::now(), false);
        state.add_event(QueryEvent::resolved(Payload::UserScore(UserScore::default())));
        state.update();

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render_splash(f, &state)).unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();

        assert!(text.contains("http://localhost:8000"));
        assert!(text.contains("1/7 requêtes chargées"));
    }
}
