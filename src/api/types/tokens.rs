//! Payloads and request bodies of the `/api/tokens/*` endpoints.

use super::de::{lenient_f64, lenient_string, lenient_u64, lenient_vec};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    #[serde(deserialize_with = "lenient_string")]
    pub wallet_address: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub balance: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub active_devices: u64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_rewards_earned: f64,
    #[serde(deserialize_with = "lenient_vec")]
    pub recent_transactions: Vec<Transaction>,
    #[serde(deserialize_with = "lenient_vec")]
    pub recent_rewards: Vec<Reward>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub transaction_type: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub from_user: String,
    #[serde(deserialize_with = "lenient_string")]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reward {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub reward_type: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserScore {
    #[serde(deserialize_with = "lenient_f64")]
    pub total_score: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub level: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenBalance {
    #[serde(deserialize_with = "lenient_f64")]
    pub balance: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub pending_rewards: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub wallet_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionList {
    #[serde(deserialize_with = "lenient_vec")]
    pub transactions: Vec<Transaction>,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardList {
    #[serde(deserialize_with = "lenient_vec")]
    pub rewards: Vec<Reward>,
    #[serde(deserialize_with = "lenient_u64")]
    pub total_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leaderboard {
    #[serde(deserialize_with = "lenient_vec")]
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    #[serde(deserialize_with = "lenient_u64")]
    pub rank: u64,
    #[serde(deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_score: f64,
    #[serde(deserialize_with = "lenient_u64")]
    pub level: u64,
}

/// Body of `POST /api/tokens/transfer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub to_address: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Body of `POST /api/tokens/claim-reward`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRewardRequest {
    pub reward_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

pub type TokenStatsReport = serde_json::Map<String, serde_json::Value>;
pub type RewardRates = serde_json::Map<String, serde_json::Value>;
pub type MarketInfo = serde_json::Map<String, serde_json::Value>;
pub type TransferReceipt = serde_json::Map<String, serde_json::Value>;
pub type ClaimReceipt = serde_json::Map<String, serde_json::Value>;
