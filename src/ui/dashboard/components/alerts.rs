//! Alerts panel component

use super::super::utils::{badge_span, more_line, panel_block};
use crate::views::AlertsView;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Rows needed to draw `view`, borders included.
pub fn alerts_height(view: &AlertsView) -> u16 {
    let extra = usize::from(view.more.is_some());
    (view.rows.len() + extra + 3) as u16
}

pub fn render_alerts(f: &mut Frame, area: Rect, view: &AlertsView) {
    let mut lines = vec![Line::from(Span::styled(
        view.unread_label.clone(),
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(view.rows.iter().map(|row| {
        Line::from(vec![
            badge_span(&row.badge),
            Span::raw("  "),
            Span::styled(
                row.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", row.message),
                Style::default().fg(Color::Gray),
            ),
        ])
    }));
    lines.extend(more_line(view.more.as_deref()));

    f.render_widget(Paragraph::new(lines).block(panel_block("ALERTES")), area);
}
