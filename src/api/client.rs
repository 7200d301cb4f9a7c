//! Chainwatch API Client
//!
//! A thin JSON client for the monitoring backend. Every operation issues a
//! single request; errors are handed back to the caller untouched.

use crate::api::error::ApiError;
use crate::api::types::{
    AlertsResponse, ClaimReceipt, ClaimRewardRequest, DashboardStats, DevicesOverview,
    Leaderboard, MarketInfo, NetworkStatus, Overview, Performance, Portfolio, RecentActivity,
    RewardList, RewardRates, Timeframe, TokenBalance, TokenStatsReport, TransactionList,
    TransferReceipt, TransferRequest, UserScore,
};
use crate::api::{DashboardApi, TokensApi};
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("chainwatch/", env!("CARGO_PKG_VERSION"));

mod endpoints {
    pub const OVERVIEW: &str = "/dashboard/overview";
    pub const ALERTS: &str = "/dashboard/alerts";
    pub const DEVICES_OVERVIEW: &str = "/dashboard/devices-overview";
    pub const NETWORK_STATUS: &str = "/dashboard/network-status";
    pub const RECENT_ACTIVITY: &str = "/dashboard/recent-activity";
    pub const STATS: &str = "/dashboard/stats";
    pub const PERFORMANCE: &str = "/dashboard/performance";

    pub const BALANCE: &str = "/api/tokens/balance";
    pub const TRANSFER: &str = "/api/tokens/transfer";
    pub const TRANSACTIONS: &str = "/api/tokens/transactions";
    pub const REWARDS: &str = "/api/tokens/rewards";
    pub const TOKEN_STATS: &str = "/api/tokens/stats";
    pub const SCORE: &str = "/api/tokens/score";
    pub const LEADERBOARD: &str = "/api/tokens/leaderboard";
    pub const REWARD_RATES: &str = "/api/tokens/reward-rates";
    pub const CLAIM_REWARD: &str = "/api/tokens/claim-reward";
    pub const PORTFOLIO: &str = "/api/tokens/portfolio";
    pub const MARKET_INFO: &str = "/api/tokens/market-info";
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
    api_token: Option<String>,
    client_id: String,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .build()?;
        Ok(Self {
            client,
            environment,
            api_token: None,
            client_id: uuid::Uuid::new_v4().to_string(),
        })
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    pub fn with_api_token(mut self, api_token: Option<String>) -> Self {
        self.api_token = api_token.filter(|t| !t.trim().is_empty());
        self
    }

    fn build_url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .header("X-Client-Id", self.client_id.as_str());
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await?;
        // An empty body reads as an empty object so defaults apply
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return serde_json::from_slice(b"{}").map_err(ApiError::Decode);
        }
        serde_json::from_slice(&bytes).map_err(ApiError::Decode)
    }

    async fn get_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint, params);
        log::debug!("GET {}", url);
        let response = self.with_headers(self.client.get(&url)).send().await?;

        let response = Self::handle_response_status(response).await?;
        Self::decode_response(response).await
    }

    async fn post_request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint, &[]);
        log::debug!("POST {}", url);
        let response = self
            .with_headers(self.client.post(&url))
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        Self::decode_response(response).await
    }
}

#[async_trait::async_trait]
impl DashboardApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn overview(&self) -> Result<Overview, ApiError> {
        self.get_request(endpoints::OVERVIEW, &[]).await
    }

    async fn alerts(&self) -> Result<AlertsResponse, ApiError> {
        self.get_request(endpoints::ALERTS, &[]).await
    }

    async fn devices_overview(&self) -> Result<DevicesOverview, ApiError> {
        self.get_request(endpoints::DEVICES_OVERVIEW, &[]).await
    }

    async fn network_status(&self) -> Result<NetworkStatus, ApiError> {
        self.get_request(endpoints::NETWORK_STATUS, &[]).await
    }

    async fn recent_activity(&self, limit: u32) -> Result<RecentActivity, ApiError> {
        self.get_request(endpoints::RECENT_ACTIVITY, &[("limit", limit.to_string())])
            .await
    }

    async fn stats(&self, timeframe: Timeframe) -> Result<DashboardStats, ApiError> {
        self.get_request(
            endpoints::STATS,
            &[("timeframe", timeframe.as_str().to_string())],
        )
        .await
    }

    async fn performance(&self) -> Result<Performance, ApiError> {
        self.get_request(endpoints::PERFORMANCE, &[]).await
    }
}

#[async_trait::async_trait]
impl TokensApi for ApiClient {
    async fn balance(&self) -> Result<TokenBalance, ApiError> {
        self.get_request(endpoints::BALANCE, &[]).await
    }

    async fn transfer(&self, request: TransferRequest) -> Result<TransferReceipt, ApiError> {
        self.post_request(endpoints::TRANSFER, &request).await
    }

    async fn transactions(&self, limit: u32) -> Result<TransactionList, ApiError> {
        self.get_request(endpoints::TRANSACTIONS, &[("limit", limit.to_string())])
            .await
    }

    async fn rewards(&self, limit: u32) -> Result<RewardList, ApiError> {
        self.get_request(endpoints::REWARDS, &[("limit", limit.to_string())])
            .await
    }

    async fn token_stats(&self) -> Result<TokenStatsReport, ApiError> {
        self.get_request(endpoints::TOKEN_STATS, &[]).await
    }

    async fn score(&self) -> Result<UserScore, ApiError> {
        self.get_request(endpoints::SCORE, &[]).await
    }

    async fn leaderboard(&self, limit: u32) -> Result<Leaderboard, ApiError> {
        self.get_request(endpoints::LEADERBOARD, &[("limit", limit.to_string())])
            .await
    }

    async fn reward_rates(&self) -> Result<RewardRates, ApiError> {
        self.get_request(endpoints::REWARD_RATES, &[]).await
    }

    async fn claim_reward(
        &self,
        request: ClaimRewardRequest,
    ) -> Result<ClaimReceipt, ApiError> {
        self.post_request(endpoints::CLAIM_REWARD, &request).await
    }

    async fn portfolio(&self) -> Result<Portfolio, ApiError> {
        self.get_request(endpoints::PORTFOLIO, &[]).await
    }

    async fn market_info(&self) -> Result<MarketInfo, ApiError> {
        self.get_request(endpoints::MARKET_INFO, &[]).await
    }
}
