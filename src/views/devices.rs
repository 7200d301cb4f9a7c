//! Device fleet panel: status tiles and the first few devices.

use super::format::{format_count, format_percent};
use super::status::device_status_badge;
use super::{Badge, StatTile, Tone, truncate};
use crate::api::types::DevicesOverview;
use crate::consts::cli_consts::display::DEVICES_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRow {
    pub name: String,
    pub device_type: String,
    pub badge: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicesView {
    pub total_label: String,
    pub tiles: Vec<StatTile>,
    pub rows: Vec<DeviceRow>,
    pub more: Option<String>,
}

impl DevicesView {
    pub fn build(devices: Option<&DevicesOverview>) -> Self {
        let devices = devices.cloned().unwrap_or_default();
        let distribution = &devices.status_distribution;

        let compromised_tone = if distribution.compromised > 0 {
            Tone::Danger
        } else {
            Tone::Neutral
        };
        let tiles = vec![
            StatTile::new("Actifs", format_count(distribution.active), Tone::Success),
            StatTile::new("Inactifs", format_count(distribution.inactive), Tone::Warning),
            StatTile::new(
                "Compromis",
                format_count(distribution.compromised),
                compromised_tone,
            ),
            StatTile::new("Uptime moy.", format_percent(devices.average_uptime), Tone::Info),
        ];

        let (shown, more) = truncate(&devices.device_metrics, DEVICES_LIMIT);
        let rows = shown
            .iter()
            .map(|device| DeviceRow {
                name: if device.name.is_empty() {
                    device.id.clone()
                } else {
                    device.name.clone()
                },
                device_type: device.device_type.clone(),
                badge: device_status_badge(device.status),
            })
            .collect();

        Self {
            total_label: format!("{} au total", format_count(devices.total_devices)),
            tiles,
            rows,
            more,
        }
    }

    pub fn tile(&self, label: &str) -> Option<&StatTile> {
        self.tiles.iter().find(|tile| tile.label == label)
    }
}
