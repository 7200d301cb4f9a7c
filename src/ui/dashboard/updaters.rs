//! Dashboard state update logic
//!
//! Folds query events into the store and routes failures

use super::state::DashboardState;

use crate::events::{QueryEvent, QueryOutcome};
use crate::query::ErrorPolicy;

use std::time::Instant;

impl DashboardState {
    /// Update the dashboard state with a new tick and queued events.
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    pub fn update_at(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);

        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event, now);
            self.add_to_activity_log(event);
        }

        self.notifications.prune(now);
    }

    fn process_event(&mut self, event: &QueryEvent, now: Instant) {
        self.store.apply(event);

        if let QueryOutcome::Failed { message, policy } = &event.outcome {
            match policy {
                ErrorPolicy::Notify => {
                    self.notifications
                        .push(format!("{}: {}", event.key, message), event.log_level, now);
                }
                ErrorPolicy::Log => {
                    let level: log::Level = event.log_level.into();
                    log::log!(level, "{} refresh failed: {}", event.key, message);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::api::types::UserScore;
    use crate::environment::Environment;
    use crate::query::{Payload, QueryKey};
    use std::time::Duration;

    fn http_error(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: "unavailable".to_string(),
        }
    }

    fn state() -> DashboardState {
        DashboardState::new(Environment::Local, Instant::now(), false)
    }

    #[test]
    fn notify_failures_become_toasts() {
        let mut state = state();
        state.add_event(QueryEvent::failed(
            QueryKey::Overview,
            &http_error(503),
            ErrorPolicy::Notify,
        ));
        state.update();

        let toasts: Vec<_> = state.notifications.visible().collect();
        assert_eq!(toasts.len(), 1);
        assert_eq!(
            toasts[0].message,
            "overview: HTTP error with status 503: unavailable"
        );
        assert!(state.store.is_loading(QueryKey::Overview));
        assert_eq!(state.activity_logs.len(), 1);
    }

    #[test]
    fn log_failures_stay_silent() {
        let mut state = state();
        state.add_event(QueryEvent::failed(
            QueryKey::Alerts,
            &http_error(500),
            ErrorPolicy::Log,
        ));
        state.update();

        assert!(state.notifications.is_empty());
        assert_eq!(
            state.store.error(QueryKey::Alerts),
            Some("HTTP error with status 500: unavailable")
        );
    }

    #[test]
    fn resolved_events_reach_the_store_and_toasts_expire() {
        let start = Instant::now();
        let mut state = state();
        state.add_event(QueryEvent::failed(
            QueryKey::UserScore,
            &http_error(502),
            ErrorPolicy::Notify,
        ));
        state.update_at(start);
        state.add_event(QueryEvent::resolved(Payload::UserScore(UserScore {
            total_score: 12.0,
            level: 2,
        })));
        state.update_at(start + Duration::from_secs(6));

        assert_eq!(state.store.user_score().map(|s| s.level), Some(2));
        assert!(state.notifications.is_empty());
        assert_eq!(state.tick, 2);
        assert!(state.pending_events.is_empty());
    }
}
