//! Wallet panel

use super::super::state::DashboardState;
use super::super::utils::{more_line, panel_block, tiles_line, tone_color};
use super::loading::render_panel_placeholder;
use crate::query::QueryKey;
use crate::views::PortfolioView;
use crate::views::portfolio::LedgerRow;
use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const TITLE: &str = "PORTEFEUILLE";

fn ledger_line(row: &LedgerRow) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:>8} ", row.amount),
            Style::default().fg(tone_color(row.tone)),
        ),
        Span::raw(row.label.clone()),
        Span::styled(
            format!("  {}", row.time_ago),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn section_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::UNDERLINED),
    ))
}

pub fn render_portfolio(f: &mut Frame, area: Rect, state: &DashboardState) {
    if state.store.is_loading(QueryKey::Portfolio) {
        render_panel_placeholder(f, area, TITLE, state.tick);
        return;
    }

    let view = PortfolioView::build(state.store.portfolio(), Utc::now());
    let mut lines = vec![
        Line::from(Span::styled(
            view.wallet.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        tiles_line(&view.tiles),
        section_title("Transactions"),
    ];
    lines.extend(view.transactions.iter().map(ledger_line));
    lines.extend(more_line(view.more_transactions.as_deref()));
    lines.push(section_title("Récompenses"));
    lines.extend(view.rewards.iter().map(ledger_line));
    lines.extend(more_line(view.more_rewards.as_deref()));

    f.render_widget(Paragraph::new(lines).block(panel_block(TITLE)), area);
}
