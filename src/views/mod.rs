//! View models for the dashboard panels.
//!
//! Every builder here is a pure function of an optional payload: a missing
//! payload or missing fields render as zero, empty or a default label, and
//! never panic. Terminal rendering lives in `ui`.

pub mod activity;
pub mod alerts;
pub mod devices;
pub mod format;
pub mod network;
pub mod overview;
pub mod portfolio;
pub mod status;

pub use activity::ActivityView;
pub use alerts::AlertsView;
pub use devices::DevicesView;
pub use network::NetworkView;
pub use overview::{OverviewView, ScoreView};
pub use portfolio::PortfolioView;

/// Semantic color of a label, mapped to a terminal color by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Accent,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
    pub icon: &'static str,
}

impl Badge {
    pub const fn new(label: &'static str, tone: Tone, icon: &'static str) -> Self {
        Self { label, tone, icon }
    }

    pub const fn unknown() -> Self {
        Self::new("Inconnu", Tone::Neutral, "•")
    }
}

/// A labelled figure in a row of stat tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

impl StatTile {
    pub fn new(label: &'static str, value: impl Into<String>, tone: Tone) -> Self {
        Self {
            label,
            value: value.into(),
            tone,
        }
    }
}

/// Keeps the first `limit` items and, when some were cut, a link label to
/// the full list.
pub fn truncate<T>(items: &[T], limit: usize) -> (&[T], Option<String>) {
    if items.len() > limit {
        (&items[..limit], Some(format!("Voir tout ({})", items.len())))
    } else {
        (items, None)
    }
}
