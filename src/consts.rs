pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Polling intervals, display limits and transport settings,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of query events to keep in the activity log.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel between pollers and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Refresh intervals for each dashboard query
    pub mod polling {
        use std::time::Duration;

        /// User, device, token and network overview (milliseconds)
        pub const OVERVIEW_REFRESH_MS: u64 = 30_000;

        /// Blockchain, mining and token supply status (milliseconds)
        pub const NETWORK_STATUS_REFRESH_MS: u64 = 30_000;

        /// Wallet portfolio (milliseconds)
        pub const PORTFOLIO_REFRESH_MS: u64 = 30_000;

        /// User score and level (milliseconds)
        pub const USER_SCORE_REFRESH_MS: u64 = 30_000;

        /// Device fleet overview (milliseconds)
        pub const DEVICES_OVERVIEW_REFRESH_MS: u64 = 60_000;

        /// Recent activity feed (milliseconds)
        pub const RECENT_ACTIVITY_REFRESH_MS: u64 = 60_000;

        pub const fn overview_refresh() -> Duration {
            Duration::from_millis(OVERVIEW_REFRESH_MS)
        }

        pub const fn network_status_refresh() -> Duration {
            Duration::from_millis(NETWORK_STATUS_REFRESH_MS)
        }

        pub const fn portfolio_refresh() -> Duration {
            Duration::from_millis(PORTFOLIO_REFRESH_MS)
        }

        pub const fn user_score_refresh() -> Duration {
            Duration::from_millis(USER_SCORE_REFRESH_MS)
        }

        pub const fn devices_overview_refresh() -> Duration {
            Duration::from_millis(DEVICES_OVERVIEW_REFRESH_MS)
        }

        pub const fn recent_activity_refresh() -> Duration {
            Duration::from_millis(RECENT_ACTIVITY_REFRESH_MS)
        }
    }

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// List truncation and number formatting
    pub mod display {
        /// Alerts shown in the alerts panel
        pub const ALERTS_LIMIT: usize = 5;

        /// Devices shown in the devices panel
        pub const DEVICES_LIMIT: usize = 5;

        /// Transactions shown in the portfolio panel
        pub const TRANSACTIONS_LIMIT: usize = 3;

        /// Rewards shown in the portfolio panel
        pub const REWARDS_LIMIT: usize = 3;

        /// Activities requested from /dashboard/recent-activity
        pub const RECENT_ACTIVITY_FETCH_LIMIT: u32 = 10;

        /// Default `limit` for list commands on the command line
        pub const DEFAULT_LIST_LIMIT: u32 = 20;

        /// Values strictly above this are abbreviated with a "K" suffix
        pub const ABBREVIATION_THRESHOLD: f64 = 1000.0;
    }

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    /// HTTP transport settings
    pub mod http {
        use std::time::Duration;

        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        pub const REQUEST_TIMEOUT_SECS: u64 = 15;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    /// Toast notifications
    pub mod notifications {
        use std::time::Duration;

        /// How long a toast stays on screen (seconds)
        pub const TOAST_TTL_SECS: u64 = 5;

        /// Toasts visible at once; the oldest is dropped first
        pub const MAX_TOASTS: usize = 3;

        pub const fn toast_ttl() -> Duration {
            Duration::from_secs(TOAST_TTL_SECS)
        }
    }
}
