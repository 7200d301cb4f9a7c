//! Dashboard state management
//!
//! Holds the query store fed by pollers plus UI-only state

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::error_classifier::LogLevel;
use crate::events::QueryEvent;
use crate::notifications::Notifications;
use crate::logging::display_threshold;
use crate::query::QueryStore;

use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug)]
pub struct DashboardState {
    /// The environment the dashboard is reading from.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Last known result of every mounted query.
    pub store: QueryStore,
    /// Toasts for failures shown to the user.
    pub notifications: Notifications,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<QueryEvent>,
    /// Activity logs for display (last 100 events)
    pub activity_logs: VecDeque<QueryEvent>,
    /// Lowest level shown in the logs panel, read from `RUST_LOG` once.
    pub log_threshold: LogLevel,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    pub fn new(environment: Environment, start_time: Instant, with_background_color: bool) -> Self {
        Self {
            environment,
            start_time,
            store: QueryStore::new(),
            notifications: Notifications::new(),
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            log_threshold: display_threshold(),
            with_background_color,
            tick: 0,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: QueryEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: QueryEvent) {
        self.pending_events.push_back(event);
    }
}
