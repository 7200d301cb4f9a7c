//! Display threshold for refresh events.
//!
//! The refresh log panel and `chainwatch watch` read `RUST_LOG` the way
//! `env_logger` would for this binary: a bare level sets the default, a
//! `chainwatch=<level>` directive overrides it, directives for other
//! targets are ignored.

use crate::error_classifier::LogLevel;
use std::env;

/// Target name matched by `RUST_LOG` directives.
pub const LOG_TARGET: &str = "chainwatch";

/// Threshold from the current `RUST_LOG`, `info` when unset.
pub fn display_threshold() -> LogLevel {
    threshold_from(env::var("RUST_LOG").ok().as_deref())
}

pub fn threshold_from(rust_log: Option<&str>) -> LogLevel {
    let mut default_level = None;
    let mut target_level = None;

    for directive in rust_log
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
    {
        match directive.split_once('=') {
            Some((target, level)) if targets_this_crate(target.trim()) => {
                target_level = parse_level(level).or(target_level);
            }
            Some(_) => {}
            None => default_level = parse_level(directive).or(default_level),
        }
    }

    target_level.or(default_level).unwrap_or(LogLevel::Info)
}

fn targets_this_crate(target: &str) -> bool {
    target == LOG_TARGET
        || target
            .strip_prefix(LOG_TARGET)
            .is_some_and(|rest| rest.starts_with("::"))
}

fn parse_level(raw: &str) -> Option<LogLevel> {
    match raw.trim().to_lowercase().as_str() {
        "trace" => Some(LogLevel::Trace),
        "debug" => Some(LogLevel::Debug),
        "info" => Some(LogLevel::Info),
        "warn" | "warning" => Some(LogLevel::Warn),
        // Nothing is quieter than error here; failures shown as toasts stay visible anyway
        "error" | "off" => Some(LogLevel::Error),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_unparsable_defaults_to_info() {
        assert_eq!(threshold_from(None), LogLevel::Info);
        assert_eq!(threshold_from(Some("")), LogLevel::Info);
        assert_eq!(threshold_from(Some("verbose")), LogLevel::Info);
    }

    #[test]
    fn bare_level_sets_the_default() {
        assert_eq!(threshold_from(Some("debug")), LogLevel::Debug);
        assert_eq!(threshold_from(Some("WARNING")), LogLevel::Warn);
        assert_eq!(threshold_from(Some("off")), LogLevel::Error);
    }

    #[test]
    fn crate_directive_overrides_default_in_any_position() {
        assert_eq!(threshold_from(Some("warn,chainwatch=debug")), LogLevel::Debug);
        assert_eq!(threshold_from(Some("chainwatch=error,info")), LogLevel::Error);
        assert_eq!(
            threshold_from(Some("chainwatch::query=trace")),
            LogLevel::Trace
        );
    }

    #[test]
    fn other_targets_are_ignored() {
        assert_eq!(threshold_from(Some("reqwest=trace")), LogLevel::Info);
        assert_eq!(threshold_from(Some("hyper=debug,warn")), LogLevel::Warn);
        assert_eq!(
            threshold_from(Some("chainwatcher=debug")),
            LogLevel::Info
        );
    }
}
