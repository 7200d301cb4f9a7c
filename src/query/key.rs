//! Query identities, payloads and per-query options.

use crate::api::types::{
    AlertsResponse, DevicesOverview, NetworkStatus, Overview, Portfolio, RecentActivity,
    UserScore,
};
use crate::consts::cli_consts::polling;
use crate::views::format::format_number;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One cache key per data dependency of the dashboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QueryKey {
    Overview,
    Alerts,
    DevicesOverview,
    NetworkStatus,
    RecentActivity,
    Portfolio,
    UserScore,
}

impl QueryKey {
    pub const ALL: [QueryKey; 7] = [
        QueryKey::Overview,
        QueryKey::Alerts,
        QueryKey::DevicesOverview,
        QueryKey::NetworkStatus,
        QueryKey::RecentActivity,
        QueryKey::Portfolio,
        QueryKey::UserScore,
    ];
}

/// Typed result of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Overview(Overview),
    Alerts(AlertsResponse),
    DevicesOverview(DevicesOverview),
    NetworkStatus(NetworkStatus),
    RecentActivity(RecentActivity),
    Portfolio(Portfolio),
    UserScore(UserScore),
}

impl Payload {
    pub fn key(&self) -> QueryKey {
        match self {
            Payload::Overview(_) => QueryKey::Overview,
            Payload::Alerts(_) => QueryKey::Alerts,
            Payload::DevicesOverview(_) => QueryKey::DevicesOverview,
            Payload::NetworkStatus(_) => QueryKey::NetworkStatus,
            Payload::RecentActivity(_) => QueryKey::RecentActivity,
            Payload::Portfolio(_) => QueryKey::Portfolio,
            Payload::UserScore(_) => QueryKey::UserScore,
        }
    }

    /// One-line digest for headless output.
    pub fn summary(&self) -> String {
        match self {
            Payload::Overview(o) => format!(
                "{} devices active of {}, balance {}",
                o.device_stats.active_devices,
                o.device_stats.total_devices,
                format_number(o.token_stats.balance)
            ),
            Payload::Alerts(a) => format!("{} unread, {} listed", a.unread_count, a.alerts.len()),
            Payload::DevicesOverview(d) => format!(
                "{} devices, {} compromised, uptime {:.1}%",
                d.total_devices, d.status_distribution.compromised, d.average_uptime
            ),
            Payload::NetworkStatus(n) => format!(
                "synced={}, {} blocks, {} pending",
                n.blockchain.is_synced,
                format_number(n.blockchain.total_blocks as f64),
                n.blockchain.pending_transactions
            ),
            Payload::RecentActivity(r) => format!("{} activities", r.activities.len()),
            Payload::Portfolio(p) => format!(
                "balance {}, {} transactions, {} rewards",
                format_number(p.balance),
                p.recent_transactions.len(),
                p.recent_rewards.len()
            ),
            Payload::UserScore(s) => {
                format!("score {}, level {}", format_number(s.total_score), s.level)
            }
        }
    }
}

/// Where a failed fetch is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Show a transient toast to the user.
    Notify,
    /// Log only; the panel silently keeps its previous state.
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub key: QueryKey,
    /// `None` fetches once and then only on explicit invalidation.
    pub refresh_interval: Option<Duration>,
    pub on_error: ErrorPolicy,
}

impl QueryOptions {
    /// Default polling behaviour of each dashboard query.
    pub fn for_key(key: QueryKey) -> Self {
        let (refresh_interval, on_error) = match key {
            QueryKey::Overview => (Some(polling::overview_refresh()), ErrorPolicy::Notify),
            QueryKey::Alerts => (None, ErrorPolicy::Log),
            QueryKey::DevicesOverview => (
                Some(polling::devices_overview_refresh()),
                ErrorPolicy::Notify,
            ),
            QueryKey::NetworkStatus => {
                (Some(polling::network_status_refresh()), ErrorPolicy::Notify)
            }
            QueryKey::RecentActivity => (
                Some(polling::recent_activity_refresh()),
                ErrorPolicy::Notify,
            ),
            QueryKey::Portfolio => (Some(polling::portfolio_refresh()), ErrorPolicy::Notify),
            QueryKey::UserScore => (Some(polling::user_score_refresh()), ErrorPolicy::Notify),
        };
        Self {
            key,
            refresh_interval,
            on_error,
        }
    }

    pub fn with_refresh_interval(mut self, refresh_interval: Option<Duration>) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }
}
