//! Blockchain, mining and token supply figures.

use super::format::{format_count, format_number};
use super::status::sync_badge;
use super::{Badge, StatTile, Tone};
use crate::api::types::NetworkStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkView {
    pub sync: Badge,
    pub blockchain: Vec<StatTile>,
    pub mining: Vec<StatTile>,
    pub tokens: Vec<StatTile>,
}

impl NetworkView {
    pub fn build(status: Option<&NetworkStatus>) -> Self {
        let status = status.cloned().unwrap_or_default();
        let pending_tone = if status.blockchain.pending_transactions > 0 {
            Tone::Warning
        } else {
            Tone::Neutral
        };

        Self {
            sync: sync_badge(status.blockchain.is_synced),
            blockchain: vec![
                StatTile::new(
                    "Blocs",
                    format_count(status.blockchain.total_blocks),
                    Tone::Neutral,
                ),
                StatTile::new(
                    "En attente",
                    format_count(status.blockchain.pending_transactions),
                    pending_tone,
                ),
            ],
            mining: vec![
                StatTile::new(
                    "Difficulté",
                    format_number(status.mining.difficulty),
                    Tone::Neutral,
                ),
                StatTile::new(
                    "Mineurs actifs",
                    format_count(status.mining.active_miners),
                    Tone::Info,
                ),
                StatTile::new(
                    "Hashrate",
                    format_number(status.mining.hash_rate),
                    Tone::Accent,
                ),
                StatTile::new(
                    "Blocs du jour",
                    format_count(status.mining.blocks_today),
                    Tone::Neutral,
                ),
            ],
            tokens: vec![
                StatTile::new(
                    "En circulation",
                    format_number(status.tokens.circulating_supply),
                    Tone::Neutral,
                ),
                StatTile::new(
                    "Offre totale",
                    format_number(status.tokens.total_supply),
                    Tone::Neutral,
                ),
                StatTile::new(
                    "Détenteurs",
                    format_count(status.tokens.active_holders),
                    Tone::Neutral,
                ),
                StatTile::new(
                    "Volume",
                    format_number(status.tokens.transaction_volume),
                    Tone::Neutral,
                ),
            ],
        }
    }
}
