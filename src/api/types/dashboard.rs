//! Payloads of the `/dashboard/*` endpoints.

use super::de::{
    lenient_bool, lenient_counts, lenient_f64, lenient_string, lenient_u64, lenient_vec,
    null_default, string_enum,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate snapshot for the dashboard landing view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Overview {
    #[serde(deserialize_with = "null_default")]
    pub user_info: UserInfo,
    #[serde(deserialize_with = "null_default")]
    pub device_stats: DeviceStats,
    #[serde(deserialize_with = "null_default")]
    pub token_stats: TokenStats,
    #[serde(deserialize_with = "null_default")]
    pub network_stats: NetworkStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub reputation_score: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub level: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceStats {
    #[serde(deserialize_with = "lenient_u64")]
    pub active_devices: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_devices: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenStats {
    #[serde(deserialize_with = "lenient_f64")]
    pub balance: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub recent_rewards: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkStats {
    #[serde(deserialize_with = "lenient_u64")]
    pub total_blocks: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_transactions: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub active_miners: u64,
    #[serde(deserialize_with = "lenient_f64")]
    pub mining_difficulty: f64,
}

string_enum! {
    /// Alert severity.
    Severity {
        Error => "error",
        Warning => "warning",
        Info => "info",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertsResponse {
    #[serde(deserialize_with = "lenient_u64")]
    pub unread_count: u64,
    #[serde(deserialize_with = "lenient_vec")]
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
    pub severity: Severity,
    #[serde(deserialize_with = "lenient_string")]
    pub timestamp: String,
}

string_enum! {
    /// Lifecycle status of a monitored device.
    DeviceStatus {
        Active => "active",
        Inactive => "inactive",
        Compromised => "compromised",
        Maintenance => "maintenance",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevicesOverview {
    #[serde(deserialize_with = "lenient_u64")]
    pub total_devices: u64,
    #[serde(deserialize_with = "null_default")]
    pub status_distribution: StatusDistribution,
    #[serde(deserialize_with = "lenient_counts")]
    pub device_types: BTreeMap<String, u64>,
    /// Percentage, 0 to 100.
    #[serde(deserialize_with = "lenient_f64")]
    pub average_uptime: f64,
    #[serde(deserialize_with = "lenient_vec")]
    pub device_metrics: Vec<DeviceMetric>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusDistribution {
    #[serde(deserialize_with = "lenient_u64")]
    pub active: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub inactive: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub compromised: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub maintenance: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceMetric {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub device_type: String,
    pub status: DeviceStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkStatus {
    #[serde(deserialize_with = "null_default")]
    pub blockchain: BlockchainStatus,
    #[serde(deserialize_with = "null_default")]
    pub mining: MiningStatus,
    #[serde(deserialize_with = "null_default")]
    pub tokens: TokenSupply,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockchainStatus {
    #[serde(alias = "synced", deserialize_with = "lenient_bool")]
    pub is_synced: bool,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_blocks: u64,
    #[serde(deserialize_with = "lenient_u64")]
    pub pending_transactions: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningStatus {
    #[serde(deserialize_with = "lenient_f64")]
    pub difficulty: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub active_miners: u64,
    #[serde(deserialize_with = "lenient_f64")]
    pub hash_rate: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub blocks_today: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSupply {
    #[serde(deserialize_with = "lenient_f64")]
    pub circulating_supply: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_supply: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub active_holders: u64,
    #[serde(deserialize_with = "lenient_f64")]
    pub transaction_volume: f64,
}

string_enum! {
    /// Kind of entry in the recent activity feed.
    ActivityType {
        Reward => "reward",
        Transaction => "transaction",
        DeviceActivity => "device_activity",
        Anomaly => "anomaly",
        Mining => "mining",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecentActivity {
    #[serde(deserialize_with = "lenient_u64")]
    pub total_count: u64,
    #[serde(deserialize_with = "lenient_vec")]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub timestamp: String,
}

/// Window for `/dashboard/stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Timeframe {
    #[default]
    #[value(name = "24h")]
    Day,
    #[value(name = "7d")]
    Week,
    #[value(name = "30d")]
    Month,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Day => "24h",
            Timeframe::Week => "7d",
            Timeframe::Month => "30d",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-form aggregate stats for a timeframe.
pub type DashboardStats = serde_json::Map<String, serde_json::Value>;

/// Free-form backend performance figures.
pub type Performance = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_zeroed_overview() {
        let overview: Overview = serde_json::from_str("{}").unwrap();
        assert_eq!(overview, Overview::default());
    }

    #[test]
    fn null_sections_yield_defaults() {
        let overview: Overview = serde_json::from_str(
            r#"{"user_info": null, "device_stats": {"active_devices": null, "total_devices": 4}}"#,
        )
        .unwrap();
        assert_eq!(overview.user_info, UserInfo::default());
        assert_eq!(overview.device_stats.active_devices, 0);
        assert_eq!(overview.device_stats.total_devices, 4);
    }

    #[test]
    fn null_alert_entries_are_skipped() {
        let alerts: AlertsResponse =
            serde_json::from_str(r#"{"unread_count": 1, "alerts": [null, {"title": "t"}]}"#)
                .unwrap();
        assert_eq!(alerts.alerts.len(), 1);
        assert_eq!(alerts.alerts[0].title, "t");
    }

    #[test]
    fn unrecognised_enums_become_unknown() {
        let devices: DevicesOverview = serde_json::from_str(
            r#"{"device_metrics": [
                {"id": 1, "name": "probe", "type": "sensor", "status": "exploded"},
                {"id": 2, "name": "gate", "type": "gateway", "status": null},
                {"id": 3, "name": "hub", "type": "hub", "status": "Active"}
            ]}"#,
        )
        .unwrap();
        let statuses: Vec<DeviceStatus> =
            devices.device_metrics.iter().map(|d| d.status).collect();
        assert_eq!(
            statuses,
            vec![
                DeviceStatus::Unknown,
                DeviceStatus::Unknown,
                DeviceStatus::Active
            ]
        );
        assert_eq!(devices.device_metrics[0].id, "1");
        assert_eq!(devices.device_metrics[0].device_type, "sensor");
    }

    #[test]
    fn activity_type_reads_the_type_field() {
        let activity: RecentActivity = serde_json::from_str(
            r#"{"total_count": 2, "activities": [
                {"type": "device_activity", "description": "probe online", "timestamp": "2026-10-18T10:00:00Z"},
                {"description": "no type"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(activity.activities[0].activity_type, ActivityType::DeviceActivity);
        assert_eq!(activity.activities[1].activity_type, ActivityType::Unknown);
    }

    #[test]
    fn sync_flag_accepts_alias() {
        let status: NetworkStatus =
            serde_json::from_str(r#"{"blockchain": {"synced": true, "total_blocks": 10}}"#)
                .unwrap();
        assert!(status.blockchain.is_synced);
        assert_eq!(status.blockchain.total_blocks, 10);
    }
}
