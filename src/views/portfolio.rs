//! Wallet balance with the latest transactions and rewards.

use super::format::{format_number, format_time_ago, shorten_address};
use super::{StatTile, Tone, truncate};
use crate::api::types::Portfolio;
use crate::consts::cli_consts::display::{REWARDS_LIMIT, TRANSACTIONS_LIMIT};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    pub label: String,
    pub amount: String,
    pub tone: Tone,
    pub time_ago: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioView {
    pub wallet: String,
    pub tiles: Vec<StatTile>,
    pub transactions: Vec<LedgerRow>,
    pub more_transactions: Option<String>,
    pub rewards: Vec<LedgerRow>,
    pub more_rewards: Option<String>,
}

impl PortfolioView {
    pub fn build(portfolio: Option<&Portfolio>, now: DateTime<Utc>) -> Self {
        let portfolio = portfolio.cloned().unwrap_or_default();

        let (transactions, more_transactions) =
            truncate(&portfolio.recent_transactions, TRANSACTIONS_LIMIT);
        let transactions = transactions
            .iter()
            .map(|tx| {
                let label = match (tx.transaction_type.as_str(), tx.from_user.as_str()) {
                    ("", "") => "Transaction".to_string(),
                    ("", from) => format!("Transaction de {}", from),
                    (kind, "") => kind.to_string(),
                    (kind, from) => format!("{} de {}", kind, from),
                };
                LedgerRow {
                    label,
                    amount: signed_amount(tx.amount),
                    tone: if tx.amount < 0.0 {
                        Tone::Danger
                    } else {
                        Tone::Success
                    },
                    time_ago: format_time_ago(&tx.timestamp, now),
                }
            })
            .collect();

        let (rewards, more_rewards) = truncate(&portfolio.recent_rewards, REWARDS_LIMIT);
        let rewards = rewards
            .iter()
            .map(|reward| LedgerRow {
                label: if reward.reward_type.is_empty() {
                    "Récompense".to_string()
                } else {
                    reward.reward_type.clone()
                },
                amount: signed_amount(reward.amount),
                tone: Tone::Success,
                time_ago: format_time_ago(&reward.timestamp, now),
            })
            .collect();

        Self {
            wallet: shorten_address(&portfolio.wallet_address),
            tiles: vec![
                StatTile::new("Solde", format_number(portfolio.balance), Tone::Accent),
                StatTile::new(
                    "Appareils actifs",
                    format_number(portfolio.active_devices as f64),
                    Tone::Info,
                ),
                StatTile::new(
                    "Gains totaux",
                    format_number(portfolio.total_rewards_earned),
                    Tone::Success,
                ),
            ],
            transactions,
            more_transactions,
            rewards,
            more_rewards,
        }
    }
}

fn signed_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}", format_number(-amount))
    } else {
        format!("+{}", format_number(amount))
    }
}
