use std::time::Duration;

/// Tunables for the simulated downloads
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// How often each downloading record receives a tick.
    pub tick_interval: Duration,
    /// Exclusive upper bound of a single random progress step.
    pub max_increment: f32,
    /// Number of records shown on the download tab.
    pub active_view_limit: usize,
    /// How long a notice stays on screen.
    pub notice_ttl: Duration,
    pub size_label: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(500),
            max_increment: 15.0,
            active_view_limit: 3,
            notice_ttl: Duration::from_secs(4),
            size_label: "125 MB".to_string(),
        }
    }
}
