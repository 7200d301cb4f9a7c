//! Keyed response store.
//!
//! Holds the last known result of every mounted query. Entries are replaced
//! whole, last writer wins, and a failure never erases data fetched earlier.

use super::key::{Payload, QueryKey};
use crate::api::types::{
    AlertsResponse, DevicesOverview, NetworkStatus, Overview, Portfolio, RecentActivity,
    UserScore,
};
use crate::events::{QueryEvent, QueryOutcome};
use chrono::{DateTime, Local};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryEntry {
    /// Last successfully fetched value, kept across failures.
    pub data: Option<Payload>,
    pub last_fetched_at: Option<DateTime<Local>>,
    /// Message of the most recent failure, cleared on success.
    pub error: Option<String>,
    /// Failures since the last success.
    pub consecutive_failures: u32,
}

#[derive(Debug, Default)]
pub struct QueryStore {
    entries: HashMap<QueryKey, QueryEntry>,
}

impl QueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a poller result into the entry for its key.
    pub fn apply(&mut self, event: &QueryEvent) {
        match &event.outcome {
            QueryOutcome::Resolved(payload) => {
                self.resolve(payload.clone(), event.timestamp);
            }
            QueryOutcome::Failed { message, .. } => {
                self.fail(event.key, message.clone());
            }
        }
    }

    pub fn resolve(&mut self, payload: Payload, fetched_at: DateTime<Local>) {
        let entry = QueryEntry {
            data: Some(payload.clone()),
            last_fetched_at: Some(fetched_at),
            error: None,
            consecutive_failures: 0,
        };
        self.entries.insert(payload.key(), entry);
    }

    pub fn fail(&mut self, key: QueryKey, message: String) {
        let previous = self.entries.remove(&key).unwrap_or_default();
        let entry = QueryEntry {
            error: Some(message),
            consecutive_failures: previous.consecutive_failures.saturating_add(1),
            ..previous
        };
        self.entries.insert(key, entry);
    }

    pub fn get(&self, key: QueryKey) -> Option<&QueryEntry> {
        self.entries.get(&key)
    }

    pub fn data(&self, key: QueryKey) -> Option<&Payload> {
        self.entries.get(&key).and_then(|entry| entry.data.as_ref())
    }

    /// Number of queries holding data.
    pub fn loaded_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.data.is_some()).count()
    }

    /// True until the first successful fetch for `key`.
    pub fn is_loading(&self, key: QueryKey) -> bool {
        self.data(key).is_none()
    }

    pub fn error(&self, key: QueryKey) -> Option<&str> {
        self.entries.get(&key).and_then(|entry| entry.error.as_deref())
    }

    pub fn overview(&self) -> Option<&Overview> {
        match self.data(QueryKey::Overview) {
            Some(Payload::Overview(overview)) => Some(overview),
            _ => None,
        }
    }

    pub fn alerts(&self) -> Option<&AlertsResponse> {
        match self.data(QueryKey::Alerts) {
            Some(Payload::Alerts(alerts)) => Some(alerts),
            _ => None,
        }
    }

    pub fn devices_overview(&self) -> Option<&DevicesOverview> {
        match self.data(QueryKey::DevicesOverview) {
            Some(Payload::DevicesOverview(devices)) => Some(devices),
            _ => None,
        }
    }

    pub fn network_status(&self) -> Option<&NetworkStatus> {
        match self.data(QueryKey::NetworkStatus) {
            Some(Payload::NetworkStatus(status)) => Some(status),
            _ => None,
        }
    }

    pub fn recent_activity(&self) -> Option<&RecentActivity> {
        match self.data(QueryKey::RecentActivity) {
            Some(Payload::RecentActivity(activity)) => Some(activity),
            _ => None,
        }
    }

    pub fn portfolio(&self) -> Option<&Portfolio> {
        match self.data(QueryKey::Portfolio) {
            Some(Payload::Portfolio(portfolio)) => Some(portfolio),
            _ => None,
        }
    }

    pub fn user_score(&self) -> Option<&UserScore> {
        match self.data(QueryKey::UserScore) {
            Some(Payload::UserScore(score)) => Some(score),
            _ => None,
        }
    }
}
