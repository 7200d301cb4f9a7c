//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::error_classifier::LogLevel;
use crate::views::{Badge, StatTile, Tone};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding};
use std::time::Duration;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Terminal color of a semantic tone.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::LightGreen,
        Tone::Warning => Color::LightYellow,
        Tone::Danger => Color::LightRed,
        Tone::Info => Color::LightBlue,
        Tone::Accent => Color::Cyan,
        Tone::Neutral => Color::Gray,
    }
}

pub fn log_level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Error => Color::LightRed,
        LogLevel::Warn => Color::LightYellow,
        _ => Color::Gray,
    }
}

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Rounded, padded panel block shared by every component.
pub fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1))
}

pub fn badge_span(badge: &Badge) -> Span<'static> {
    Span::styled(
        format!("{} {}", badge.icon, badge.label),
        Style::default().fg(tone_color(badge.tone)),
    )
}

/// Renders tiles side by side as "Label value" pairs.
pub fn tiles_line(tiles: &[StatTile]) -> Line<'static> {
    let mut spans = Vec::with_capacity(tiles.len() * 3);
    for (i, tile) in tiles.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("{} ", tile.label),
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::styled(
            tile.value.clone(),
            Style::default()
                .fg(tone_color(tile.tone))
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

pub fn more_line(more: Option<&str>) -> Option<Line<'static>> {
    more.map(|label| {
        Line::from(Span::styled(
            format!("→ {}", label),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    })
}

pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!("{}d {}h {}m", secs / 86400, (secs % 86400) / 3600, (secs % 3600) / 60)
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formats() {
        assert_eq!(format_uptime(Duration::from_secs(59)), "0m 59s");
        assert_eq!(format_uptime(Duration::from_secs(3_725)), "1h 2m 5s");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "1d 1h 1m");
    }

    #[test]
    fn tiles_are_joined_with_separators() {
        let tiles = [
            StatTile::new("Actifs", "10", Tone::Success),
            StatTile::new("Inactifs", "1", Tone::Warning),
        ];
        let text: String = tiles_line(&tiles)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(text, "Actifs 10  │  Inactifs 1");
    }

    #[test]
    fn spinner_wraps_around() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER_FRAMES.len()));
    }
}
