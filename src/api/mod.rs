use crate::environment::Environment;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub use error::ApiError;
pub mod types;

use types::{
    AlertsResponse, ClaimReceipt, ClaimRewardRequest, DashboardStats, DevicesOverview,
    Leaderboard, MarketInfo, NetworkStatus, Overview, Performance, Portfolio, RecentActivity,
    RewardList, RewardRates, Timeframe, TokenBalance, TokenStatsReport, TransactionList,
    TransferReceipt, TransferRequest, UserScore,
};

#[cfg(test)]
use mockall::automock;

/// Operations under `/dashboard`. Each performs exactly one request and
/// returns the backend error unchanged.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// User, device, token and network snapshot.
    async fn overview(&self) -> Result<Overview, ApiError>;

    /// Unread count and latest alerts.
    async fn alerts(&self) -> Result<AlertsResponse, ApiError>;

    /// Fleet status distribution, type histogram and recent device metrics.
    async fn devices_overview(&self) -> Result<DevicesOverview, ApiError>;

    /// Blockchain, mining and token supply status.
    async fn network_status(&self) -> Result<NetworkStatus, ApiError>;

    /// Latest `limit` activity records.
    async fn recent_activity(&self, limit: u32) -> Result<RecentActivity, ApiError>;

    /// Aggregate stats over a timeframe.
    async fn stats(&self, timeframe: Timeframe) -> Result<DashboardStats, ApiError>;

    async fn performance(&self) -> Result<Performance, ApiError>;
}

/// Operations under `/api/tokens`.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait TokensApi: Send + Sync {
    async fn balance(&self) -> Result<TokenBalance, ApiError>;

    /// Sends tokens to another wallet.
    async fn transfer(&self, request: TransferRequest) -> Result<TransferReceipt, ApiError>;

    async fn transactions(&self, limit: u32) -> Result<TransactionList, ApiError>;

    async fn rewards(&self, limit: u32) -> Result<RewardList, ApiError>;

    async fn token_stats(&self) -> Result<TokenStatsReport, ApiError>;

    async fn score(&self) -> Result<UserScore, ApiError>;

    async fn leaderboard(&self, limit: u32) -> Result<Leaderboard, ApiError>;

    async fn reward_rates(&self) -> Result<RewardRates, ApiError>;

    /// Claims a pending reward.
    async fn claim_reward(&self, request: ClaimRewardRequest)
    -> Result<ClaimReceipt, ApiError>;

    async fn portfolio(&self) -> Result<Portfolio, ApiError>;

    async fn market_info(&self) -> Result<MarketInfo, ApiError>;
}
