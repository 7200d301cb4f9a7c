//! Alerts panel. Hidden entirely while no alert is known.

use super::format::pluralize;
use super::status::severity_badge;
use super::{Badge, truncate};
use crate::api::types::AlertsResponse;
use crate::consts::cli_consts::display::ALERTS_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRow {
    pub badge: Badge,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertsView {
    pub unread_label: String,
    pub rows: Vec<AlertRow>,
    pub more: Option<String>,
}

impl AlertsView {
    /// `None` when there is nothing to show, including a failed or
    /// pending fetch.
    pub fn build(alerts: Option<&AlertsResponse>) -> Option<Self> {
        let alerts = alerts?;
        if alerts.alerts.is_empty() {
            return None;
        }
        let (shown, more) = truncate(&alerts.alerts, ALERTS_LIMIT);
        let rows = shown
            .iter()
            .map(|alert| AlertRow {
                badge: severity_badge(alert.severity),
                title: alert.title.clone(),
                message: alert.message.clone(),
            })
            .collect();

        Some(Self {
            unread_label: unread_label(alerts.unread_count),
            rows,
            more,
        })
    }
}

/// "1 alerte non lue", "3 alertes non lues".
pub fn unread_label(count: u64) -> String {
    format!(
        "{} {} {}",
        count,
        pluralize(count, "alerte"),
        pluralize(count, "non lue")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Alert, Severity};
    use crate::views::Tone;

    fn alert(id: usize, severity: &str) -> Alert {
        Alert {
            id: id.to_string(),
            title: format!("Alerte {}", id),
            severity: Severity::from(severity),
            ..Alert::default()
        }
    }

    #[test]
    fn unread_label_pluralizes_above_one() {
        assert_eq!(unread_label(0), "0 alerte non lue");
        assert_eq!(unread_label(1), "1 alerte non lue");
        assert_eq!(unread_label(3), "3 alertes non lues");
    }

    #[test]
    fn panel_is_hidden_without_alerts() {
        assert!(AlertsView::build(None).is_none());
        assert!(AlertsView::build(Some(&AlertsResponse::default())).is_none());
    }

    #[test]
    fn list_is_truncated_to_five() {
        let response = AlertsResponse {
            unread_count: 7,
            alerts: (0..7).map(|i| alert(i, "warning")).collect(),
        };
        let view = AlertsView::build(Some(&response)).unwrap();
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.more.as_deref(), Some("Voir tout (7)"));
        assert_eq!(view.unread_label, "7 alertes non lues");
    }

    #[test]
    fn unknown_severity_is_neutral() {
        let response = AlertsResponse {
            unread_count: 1,
            alerts: vec![alert(1, "critical")],
        };
        let view = AlertsView::build(Some(&response)).unwrap();
        assert_eq!(view.rows[0].badge.tone, Tone::Neutral);
        assert_eq!(view.rows[0].badge.label, "Inconnu");
    }
}
