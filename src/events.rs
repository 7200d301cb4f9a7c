//! Event System
//!
//! Results of query fetches, delivered from pollers to the UI

use crate::api::ApiError;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::query::{ErrorPolicy, Payload, QueryKey};
use chrono::{DateTime, Local};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Resolved(Payload),
    Failed {
        message: String,
        policy: ErrorPolicy,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryEvent {
    pub key: QueryKey,
    pub timestamp: DateTime<Local>,
    pub outcome: QueryOutcome,
    pub log_level: LogLevel,
}

impl QueryEvent {
    pub fn resolved(payload: Payload) -> Self {
        Self {
            key: payload.key(),
            timestamp: Local::now(),
            outcome: QueryOutcome::Resolved(payload),
            log_level: LogLevel::Info,
        }
    }

    pub fn failed(key: QueryKey, error: &ApiError, policy: ErrorPolicy) -> Self {
        let log_level = ErrorClassifier::new().classify_fetch_error(error);
        Self {
            key,
            timestamp: Local::now(),
            outcome: QueryOutcome::Failed {
                message: error.to_string(),
                policy,
            },
            log_level,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, QueryOutcome::Failed { .. })
    }

    /// Visibility against a threshold, see [`crate::logging::display_threshold`].
    pub fn should_display_at(&self, threshold: LogLevel) -> bool {
        // Failures the user is meant to see are always shown
        if let QueryOutcome::Failed {
            policy: ErrorPolicy::Notify,
            ..
        } = self.outcome
        {
            return true;
        }
        self.log_level >= threshold
    }
}

impl Display for QueryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let timestamp = self.timestamp.format("%Y-%m-%d %H:%M:%S");
        match &self.outcome {
            QueryOutcome::Resolved(payload) => {
                write!(f, "Refresh [{}] {}: {}", timestamp, self.key, payload.summary())
            }
            QueryOutcome::Failed { message, .. } => {
                write!(f, "Error [{}] {}: {}", timestamp, self.key, message)
            }
        }
    }
}
