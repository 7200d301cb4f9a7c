//! One-shot API commands.
//!
//! Each command performs a single request and yields the response as JSON
//! for printing.

use crate::api::types::{ClaimRewardRequest, Timeframe, TransferRequest};
use crate::api::{ApiError, DashboardApi, TokensApi};
use crate::consts::cli_consts::display::{DEFAULT_LIST_LIMIT, RECENT_ACTIVITY_FETCH_LIMIT};
use clap::Subcommand;
use serde_json::Value;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ApiCommand {
    /// Print the dashboard overview
    Overview,
    /// Print unread alerts
    Alerts,
    /// Print the device fleet overview
    Devices,
    /// Print blockchain, mining and token supply status
    Network,
    /// Print the latest activity records
    Activity {
        #[arg(long, default_value_t = RECENT_ACTIVITY_FETCH_LIMIT)]
        limit: u32,
    },
    /// Print aggregate stats for a timeframe
    Stats {
        #[arg(long, value_enum, default_value_t = Timeframe::Day)]
        timeframe: Timeframe,
    },
    /// Print performance metrics
    Performance,
    /// Print the wallet balance
    Balance,
    /// Print recent transactions
    Transactions {
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
    },
    /// Print recent rewards
    Rewards {
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
    },
    /// Print token statistics
    TokenStats,
    /// Print the user score
    Score,
    /// Print the score leaderboard
    Leaderboard {
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: u32,
    },
    /// Print current reward rates
    RewardRates,
    /// Print the wallet portfolio
    Portfolio,
    /// Print token market information
    MarketInfo,
    /// Send tokens to another wallet
    Transfer {
        /// Recipient wallet address
        #[arg(long, value_name = "ADDRESS")]
        to: String,
        /// Amount of tokens to send
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        memo: Option<String>,
    },
    /// Claim a pending reward
    ClaimReward {
        #[arg(long)]
        reward_type: String,
        #[arg(long, value_name = "DEVICE_ID")]
        device_id: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Invalid amount {0}: must be a positive number")]
    InvalidAmount(f64),

    #[error("Missing required value: {0}")]
    MissingValue(&'static str),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiCommand {
    /// Rejects arguments the backend would refuse, before any request.
    pub fn validate(&self) -> Result<(), CommandError> {
        match self {
            ApiCommand::Transfer { to, amount, .. } => {
                if to.trim().is_empty() {
                    return Err(CommandError::MissingValue("--to"));
                }
                if !amount.is_finite() || *amount <= 0.0 {
                    return Err(CommandError::InvalidAmount(*amount));
                }
                Ok(())
            }
            ApiCommand::ClaimReward { reward_type, .. } if reward_type.trim().is_empty() => {
                Err(CommandError::MissingValue("--reward-type"))
            }
            _ => Ok(()),
        }
    }

    /// True for commands that change backend state.
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            ApiCommand::Transfer { .. } | ApiCommand::ClaimReward { .. }
        )
    }

    pub async fn execute(
        &self,
        dashboard: &dyn DashboardApi,
        tokens: &dyn TokensApi,
    ) -> Result<Value, CommandError> {
        self.validate()?;
        let value = match self {
            ApiCommand::Overview => serde_json::to_value(dashboard.overview().await?)?,
            ApiCommand::Alerts => serde_json::to_value(dashboard.alerts().await?)?,
            ApiCommand::Devices => serde_json::to_value(dashboard.devices_overview().await?)?,
            ApiCommand::Network => serde_json::to_value(dashboard.network_status().await?)?,
            ApiCommand::Activity { limit } => {
                serde_json::to_value(dashboard.recent_activity(*limit).await?)?
            }
            ApiCommand::Stats { timeframe } => {
                Value::Object(dashboard.stats(*timeframe).await?)
            }
            ApiCommand::Performance => Value::Object(dashboard.performance().await?),
            ApiCommand::Balance => serde_json::to_value(tokens.balance().await?)?,
            ApiCommand::Transactions { limit } => {
                serde_json::to_value(tokens.transactions(*limit).await?)?
            }
            ApiCommand::Rewards { limit } => serde_json::to_value(tokens.rewards(*limit).await?)?,
            ApiCommand::TokenStats => Value::Object(tokens.token_stats().await?),
            ApiCommand::Score => serde_json::to_value(tokens.score().await?)?,
            ApiCommand::Leaderboard { limit } => {
                serde_json::to_value(tokens.leaderboard(*limit).await?)?
            }
            ApiCommand::RewardRates => Value::Object(tokens.reward_rates().await?),
            ApiCommand::Portfolio => serde_json::to_value(tokens.portfolio().await?)?,
            ApiCommand::MarketInfo => Value::Object(tokens.market_info().await?),
            ApiCommand::Transfer { to, amount, memo } => {
                let request = TransferRequest {
                    to_address: to.trim().to_string(),
                    amount: *amount,
                    memo: memo.clone(),
                };
                log::info!("Transferring {} tokens to {}", amount, request.to_address);
                Value::Object(tokens.transfer(request).await?)
            }
            ApiCommand::ClaimReward {
                reward_type,
                device_id,
            } => {
                let request = ClaimRewardRequest {
                    reward_type: reward_type.trim().to_string(),
                    device_id: device_id.clone(),
                };
                Value::Object(tokens.claim_reward(request).await?)
            }
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{RecentActivity, UserScore};
    use crate::api::{MockDashboardApi, MockTokensApi};
    use mockall::predicate::{eq, function};

    #[tokio::test]
    async fn transfer_rejects_non_positive_amounts_without_a_request() {
        // Mocks without expectations panic if called
        let dashboard = MockDashboardApi::new();
        let tokens = MockTokensApi::new();

        for amount in [0.0, -3.0, f64::NAN] {
            let command = ApiCommand::Transfer {
                to: "0xabc".to_string(),
                amount,
                memo: None,
            };
            let result = command.execute(&dashboard, &tokens).await;
            assert!(matches!(result, Err(CommandError::InvalidAmount(_))));
        }

        let command = ApiCommand::ClaimReward {
            reward_type: "  ".to_string(),
            device_id: None,
        };
        assert!(matches!(
            command.execute(&dashboard, &tokens).await,
            Err(CommandError::MissingValue("--reward-type"))
        ));
    }

    #[tokio::test]
    async fn transfer_posts_the_request() {
        let dashboard = MockDashboardApi::new();
        let mut tokens = MockTokensApi::new();
        tokens
            .expect_transfer()
            .with(function(|request: &TransferRequest| {
                request.to_address == "0xabc"
                    && request.amount == 12.5
                    && request.memo.as_deref() == Some("rent")
            }))
            .times(1)
            .returning(|_| {
                let mut receipt = serde_json::Map::new();
                receipt.insert("status".to_string(), Value::from("ok"));
                Ok(receipt)
            });

        let command = ApiCommand::Transfer {
            to: " 0xabc ".to_string(),
            amount: 12.5,
            memo: Some("rent".to_string()),
        };
        assert!(command.is_write());
        let value = command.execute(&dashboard, &tokens).await.unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[tokio::test]
    async fn reads_forward_their_arguments() {
        let mut dashboard = MockDashboardApi::new();
        dashboard
            .expect_recent_activity()
            .with(eq(5))
            .times(1)
            .returning(|_| {
                Ok(RecentActivity {
                    total_count: 2,
                    activities: Vec::new(),
                })
            });
        dashboard
            .expect_stats()
            .with(eq(Timeframe::Week))
            .times(1)
            .returning(|_| Ok(serde_json::Map::new()));
        let mut tokens = MockTokensApi::new();
        tokens.expect_score().returning(|| {
            Ok(UserScore {
                total_score: 42.0,
                level: 3,
            })
        });

        let activity = ApiCommand::Activity { limit: 5 }
            .execute(&dashboard, &tokens)
            .await
            .unwrap();
        assert_eq!(activity["total_count"], 2);

        let stats = ApiCommand::Stats {
            timeframe: Timeframe::Week,
        }
        .execute(&dashboard, &tokens)
        .await
        .unwrap();
        assert!(stats.as_object().unwrap().is_empty());

        let score = ApiCommand::Score.execute(&dashboard, &tokens).await.unwrap();
        assert_eq!(score["level"], 3);
        assert!(!ApiCommand::Score.is_write());
    }

    #[tokio::test]
    async fn api_errors_pass_through_unchanged() {
        let mut dashboard = MockDashboardApi::new();
        dashboard.expect_overview().returning(|| {
            Err(ApiError::Http {
                status: 404,
                message: "no such user".to_string(),
            })
        });
        let tokens = MockTokensApi::new();

        let error = ApiCommand::Overview
            .execute(&dashboard, &tokens)
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "HTTP error with status 404: no such user");
    }
}
