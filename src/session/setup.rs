//! Session setup and initialization

use crate::api::{DashboardApi, TokensApi};
use crate::config::Config;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::events::QueryEvent;
use crate::query::{DashboardQueries, QueryScheduler, Subscription};
use std::sync::Arc;
use tokio::sync::mpsc;

pub const ENV_API_URL: &str = "CHAINWATCH_API_URL";
pub const ENV_ENVIRONMENT: &str = "CHAINWATCH_ENVIRONMENT";

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Receives query results from pollers
    pub event_receiver: mpsc::Receiver<QueryEvent>,
    /// Owns one poller per mounted query
    pub scheduler: QueryScheduler,
    /// Keeps the dashboard queries mounted
    pub subscriptions: Vec<Subscription>,
    /// Backend the session reads from
    pub environment: Environment,
}

/// Picks the backend: command line, then `CHAINWATCH_API_URL`, then
/// `CHAINWATCH_ENVIRONMENT`, then the config file, then production.
///
/// Values that name no environment and are not URLs are skipped.
pub fn resolve_environment(
    cli: Option<&str>,
    api_url_var: Option<&str>,
    environment_var: Option<&str>,
    config: &Config,
) -> Environment {
    [cli, api_url_var, environment_var]
        .into_iter()
        .flatten()
        .find_map(|value| value.parse::<Environment>().ok())
        .or_else(|| config.environment())
        .unwrap_or_default()
}

/// [`resolve_environment`] reading the process environment.
pub fn resolve_environment_from_env(cli: Option<&str>, config: &Config) -> Environment {
    let api_url = std::env::var(ENV_API_URL).ok();
    let environment = std::env::var(ENV_ENVIRONMENT).ok();
    resolve_environment(cli, api_url.as_deref(), environment.as_deref(), config)
}

/// Mounts every dashboard query against the given API.
///
/// Must be called from within a tokio runtime; pollers start immediately.
pub fn setup_session(
    dashboard: Arc<dyn DashboardApi>,
    tokens: Arc<dyn TokensApi>,
    config: &Config,
) -> SessionData {
    let environment = dashboard.environment().clone();
    let (event_sender, event_receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
    let scheduler = QueryScheduler::new(event_sender);

    let queries = DashboardQueries::new(dashboard, tokens, config.recent_activity_limit())
        .with_refresh_overrides(config.refresh_overrides());
    let subscriptions = queries.mount_all(&scheduler);
    log::debug!(
        "Mounted {} dashboard queries against {}",
        subscriptions.len(),
        environment
    );

    SessionData {
        event_receiver,
        scheduler,
        subscriptions,
        environment,
    }
}
