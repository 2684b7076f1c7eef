pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying activity events to the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Buffer size of the channel carrying panel updates to the UI
    pub const UPDATE_QUEUE_SIZE: usize = 64;

    /// Buffer size of the manual refresh trigger channel
    pub const TRIGGER_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // REFRESH CADENCE
    // =============================================================================

    /// Refresh cadence configuration
    pub mod refresh {
        use std::time::Duration;

        /// Interval between timer-driven refreshes of the full dashboard (seconds)
        pub const DASHBOARD_INTERVAL_SECS: u64 = 60;

        /// Interval between timer-driven refreshes of the single-panel regime view (seconds)
        pub const REGIME_INTERVAL_SECS: u64 = 30 * 60;

        pub const fn dashboard_interval() -> Duration {
            Duration::from_secs(DASHBOARD_INTERVAL_SECS)
        }

        pub const fn regime_interval() -> Duration {
            Duration::from_secs(REGIME_INTERVAL_SECS)
        }
    }

    // =============================================================================
    // PANEL CONFIGURATION
    // =============================================================================

    /// Rendered in place of any missing or invalid value
    pub const PLACEHOLDER: &str = "—";

    /// Default calendar horizon in days
    pub const DEFAULT_DAYS_AHEAD: u32 = 2;

    /// Default neutral band of the sentiment grid. Values inside
    /// `[-epsilon, epsilon]` render as neutral.
    pub const DEFAULT_SENTIMENT_EPSILON: f64 = 0.05;

    /// Fallback messages rendered when a panel's fetch fails
    pub mod fallback {
        pub const SNAPSHOT: &str = "Données macro indisponibles.";
        pub const ORIENTATION: &str = "Orientation indisponible.";
        pub const INDICES: &str = "Indices indisponibles.";
        pub const CALENDAR: &str = "Calendrier indisponible.";
        pub const SENTIMENT_GRID: &str = "Grille de sentiment indisponible.";
        pub const HEALTH: &str = "API injoignable.";
    }
}
