//! Recent activity feed.

use super::Badge;
use super::format::format_time_ago;
use super::status::activity_badge;
use crate::api::types::RecentActivity;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRow {
    pub badge: Badge,
    pub description: String,
    pub time_ago: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityView {
    pub rows: Vec<ActivityRow>,
}

impl ActivityView {
    pub fn build(activity: Option<&RecentActivity>, now: DateTime<Utc>) -> Self {
        let rows = activity
            .map(|activity| {
                activity
                    .activities
                    .iter()
                    .map(|item| ActivityRow {
                        badge: activity_badge(item.activity_type),
                        description: item.description.clone(),
                        time_ago: format_time_ago(&item.timestamp, now),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
