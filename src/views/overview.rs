//! Header stats of the overview payload and the user score card.

use super::format::format_number;
use super::{StatTile, Tone};
use crate::api::types::{Overview, UserScore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewView {
    pub greeting: String,
    pub level: String,
    pub tiles: Vec<StatTile>,
    pub network: Vec<StatTile>,
}

impl OverviewView {
    pub fn build(overview: Option<&Overview>) -> Self {
        let overview = overview.cloned().unwrap_or_default();
        let user = &overview.user_info;
        let greeting = if user.username.is_empty() {
            "Bonjour".to_string()
        } else {
            format!("Bonjour, {}", user.username)
        };

        let devices = &overview.device_stats;
        let device_tone = if devices.total_devices > 0 && devices.active_devices == devices.total_devices
        {
            Tone::Success
        } else {
            Tone::Warning
        };

        let tiles = vec![
            StatTile::new(
                "Appareils actifs",
                format!("{}/{}", devices.active_devices, devices.total_devices),
                device_tone,
            ),
            StatTile::new(
                "Solde",
                format_number(overview.token_stats.balance),
                Tone::Accent,
            ),
            StatTile::new(
                "Récompenses récentes",
                format_number(overview.token_stats.recent_rewards),
                Tone::Success,
            ),
            StatTile::new(
                "Réputation",
                format_number(user.reputation_score),
                Tone::Info,
            ),
        ];

        let network_stats = &overview.network_stats;
        let network = vec![
            StatTile::new(
                "Blocs",
                format_number(network_stats.total_blocks as f64),
                Tone::Neutral,
            ),
            StatTile::new(
                "Transactions",
                format_number(network_stats.total_transactions as f64),
                Tone::Neutral,
            ),
            StatTile::new(
                "Mineurs actifs",
                format_number(network_stats.active_miners as f64),
                Tone::Neutral,
            ),
            StatTile::new(
                "Difficulté",
                format_number(network_stats.mining_difficulty),
                Tone::Neutral,
            ),
        ];

        Self {
            greeting,
            level: format!("Niveau {}", user.level),
            tiles,
            network,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreView {
    pub score: String,
    pub level: String,
}

impl ScoreView {
    pub fn build(score: Option<&UserScore>) -> Self {
        let score = score.cloned().unwrap_or_default();
        Self {
            score: format_number(score.total_score),
            level: format!("Niveau {}", score.level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_overview_renders_zeroes() {
        let view = OverviewView::build(None);
        assert_eq!(view.greeting, "Bonjour");
        assert_eq!(view.level, "Niveau 0");
        assert_eq!(view.tiles[0].value, "0/0");
        assert_eq!(view.tiles[1].value, "0");
        assert!(view.network.iter().all(|tile| tile.value == "0"));
    }

    #[test]
    fn large_figures_are_abbreviated() {
        let overview: Overview = serde_json::from_value(serde_json::json!({
            "user_info": { "username": "alice", "reputation_score": 87.5, "level": 4 },
            "device_stats": { "active_devices": 3, "total_devices": 3 },
            "token_stats": { "balance": 1530.0, "recent_rewards": 1000 },
            "network_stats": { "total_blocks": 125000 }
        }))
        .unwrap();

        let view = OverviewView::build(Some(&overview));
        assert_eq!(view.greeting, "Bonjour, alice");
        assert_eq!(view.tiles[0].tone, Tone::Success);
        assert_eq!(view.tiles[1].value, "1.5K");
        assert_eq!(view.tiles[2].value, "1000");
        assert_eq!(view.tiles[3].value, "87.5");
        assert_eq!(view.network[0].value, "125.0K");
    }

    #[test]
    fn score_card_defaults() {
        let view = ScoreView::build(None);
        assert_eq!(view.score, "0");
        assert_eq!(view.level, "Niveau 0");

        let score = UserScore {
            total_score: 2460.0,
            level: 7,
        };
        assert_eq!(ScoreView::build(Some(&score)).score, "2.5K");
    }
}
