//! Data dependencies of the dashboard view.

use super::key::{Payload, QueryKey, QueryOptions};
use super::scheduler::{Fetcher, QueryScheduler, Subscription};
use crate::api::{DashboardApi, TokensApi};
use futures::FutureExt;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Maps every dashboard query key to the API operation that serves it.
#[derive(Clone)]
pub struct DashboardQueries {
    dashboard: Arc<dyn DashboardApi>,
    tokens: Arc<dyn TokensApi>,
    recent_activity_limit: u32,
    refresh_overrides: BTreeMap<QueryKey, Duration>,
}

impl DashboardQueries {
    pub fn new(
        dashboard: Arc<dyn DashboardApi>,
        tokens: Arc<dyn TokensApi>,
        recent_activity_limit: u32,
    ) -> Self {
        Self {
            dashboard,
            tokens,
            recent_activity_limit,
            refresh_overrides: BTreeMap::new(),
        }
    }

    /// Replaces the default refresh interval of some queries.
    pub fn with_refresh_overrides(mut self, overrides: BTreeMap<QueryKey, Duration>) -> Self {
        self.refresh_overrides = overrides;
        self
    }

    pub fn options(&self, key: QueryKey) -> QueryOptions {
        let options = QueryOptions::for_key(key);
        match self.refresh_overrides.get(&key) {
            Some(interval) => options.with_refresh_interval(Some(*interval)),
            None => options,
        }
    }

    pub fn fetcher(&self, key: QueryKey) -> Fetcher {
        let dashboard = self.dashboard.clone();
        let tokens = self.tokens.clone();
        let limit = self.recent_activity_limit;
        Arc::new(move || {
            let dashboard = dashboard.clone();
            let tokens = tokens.clone();
            async move {
                let payload = match key {
                    QueryKey::Overview => Payload::Overview(dashboard.overview().await?),
                    QueryKey::Alerts => Payload::Alerts(dashboard.alerts().await?),
                    QueryKey::DevicesOverview => {
                        Payload::DevicesOverview(dashboard.devices_overview().await?)
                    }
                    QueryKey::NetworkStatus => {
                        Payload::NetworkStatus(dashboard.network_status().await?)
                    }
                    QueryKey::RecentActivity => {
                        Payload::RecentActivity(dashboard.recent_activity(limit).await?)
                    }
                    QueryKey::Portfolio => Payload::Portfolio(tokens.portfolio().await?),
                    QueryKey::UserScore => Payload::UserScore(tokens.score().await?),
                };
                Ok::<_, crate::api::ApiError>(payload)
            }
            .boxed()
        })
    }

    /// Mounts every dashboard query. Dropping the returned subscriptions
    /// unmounts them.
    pub fn mount_all(&self, scheduler: &QueryScheduler) -> Vec<Subscription> {
        QueryKey::ALL
            .iter()
            .map(|key| scheduler.subscribe(self.options(*key), self.fetcher(*key)))
            .collect()
    }
}
