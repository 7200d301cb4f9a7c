//! Dashboard main renderer

use super::components::{
    activity, alerts, devices, footer, header, loading, logs, network, portfolio, stats,
};
use super::state::DashboardState;
use crate::views::AlertsView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    // Nothing is drawn until the overview has resolved once.
    if state.store.overview().is_none() {
        loading::render_page_spinner(f, f.area(), state);
        return;
    }

    let alerts_view = AlertsView::build(state.store.alerts());
    let alerts_height = alerts_view.as_ref().map_or(0, alerts::alerts_height);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(alerts_height),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(footer::toasts_height(state)),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    stats::render_stats(f, main_chunks[1], state);
    if let Some(view) = &alerts_view {
        alerts::render_alerts(f, main_chunks[2], view);
    }

    let middle_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[3]);
    devices::render_devices(f, middle_chunks[0], state);
    network::render_network(f, middle_chunks[1], state);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ])
        .split(main_chunks[4]);
    activity::render_activity(f, bottom_chunks[0], state);
    portfolio::render_portfolio(f, bottom_chunks[1], state);
    logs::render_logs_panel(f, bottom_chunks[2], state);

    footer::render_toasts(f, main_chunks[5], state);
    footer::render_footer(f, main_chunks[6]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::api::types::{AlertsResponse, DevicesOverview, Overview};
    use crate::environment::Environment;
    use crate::events::QueryEvent;
    use crate::query::{ErrorPolicy, Payload, QueryKey};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn screen_text(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 60)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
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

    fn failure(key: QueryKey, policy: ErrorPolicy) -> QueryEvent {
        let error = ApiError::Http {
            status: 500,
            message: "down".to_string(),
        };
        QueryEvent::failed(key, &error, policy)
    }

    fn loaded_state() -> DashboardState {
        let mut state = DashboardState::new(Environment::Local, Instant::now(), false);
        let overview: Overview = serde_json::from_value(serde_json::json!({
            "user_info": { "username": "alice", "level": 3 },
            "device_stats": { "active_devices": 10, "total_devices": 12 }
        }))
        .unwrap();
        state.add_event(QueryEvent::resolved(Payload::Overview(overview)));
        state
    }

    #[test]
    fn failed_overview_keeps_the_spinner() {
        let mut state = DashboardState::new(Environment::Local, Instant::now(), true);
        state.add_event(failure(QueryKey::Overview, ErrorPolicy::Notify));
        state.update();

        let text = screen_text(&state);
        assert!(text.contains("Chargement..."));
        assert!(!text.contains("APERÇU"));
        assert!(!text.contains("APPAREILS"));
    }

    #[test]
    fn failed_alerts_render_page_without_alerts_panel() {
        let mut state = loaded_state();
        state.add_event(failure(QueryKey::Alerts, ErrorPolicy::Log));
        state.update();

        let text = screen_text(&state);
        assert!(text.contains("Bonjour, alice"));
        assert!(text.contains("Mis à jour "));
        assert!(text.contains("APERÇU"));
        assert!(text.contains("APPAREILS"));
        assert!(!text.contains("ALERTES"));
    }

    #[test]
    fn alerts_panel_shows_unread_count() {
        let mut state = loaded_state();
        let alerts: AlertsResponse = serde_json::from_value(serde_json::json!({
            "unread_count": 1,
            "alerts": [{ "id": "a1", "title": "Surchauffe", "severity": "error" }]
        }))
        .unwrap();
        state.add_event(QueryEvent::resolved(Payload::Alerts(alerts)));
        state.update();

        let text = screen_text(&state);
        assert!(text.contains("ALERTES"));
        assert!(text.contains("1 alerte non lue"));
        assert!(text.contains("Surchauffe"));
    }

    #[test]
    fn panels_show_placeholder_until_loaded() {
        let mut state = loaded_state();
        let devices: DevicesOverview = serde_json::from_value(serde_json::json!({
            "total_devices": 12,
            "status_distribution": { "active": 10, "inactive": 1, "compromised": 1 },
            "average_uptime": 97.6
        }))
        .unwrap();
        state.add_event(QueryEvent::resolved(Payload::DevicesOverview(devices)));
        state.update();

        let text = screen_text(&state);
        assert!(text.contains("Actifs 10"));
        assert!(text.contains("Inactifs 1"));
        assert!(text.contains("Compromis 1"));
        assert!(text.contains("Uptime moy. 98%"));
        // Network, activity and portfolio have not resolved yet
        assert!(text.contains("Chargement..."));
    }

    #[test]
    fn notify_failure_is_shown_as_toast() {
        let mut state = loaded_state();
        state.add_event(failure(QueryKey::NetworkStatus, ErrorPolicy::Notify));
        state.update();

        let text = screen_text(&state);
        assert!(text.contains("network_status: HTTP error with status 500: down"));
    }
}
