use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Snapshot file handed to the engine (`.yaml`, `.yml` or `.json`).
    pub snapshot_path: PathBuf,
    /// Rows per page in the content and creator rankings.
    pub page_size: usize,
    /// Number of highlight cards shown for the active metric.
    pub highlight_count: usize,
    /// Artificial latency applied before the snapshot resolves.
    pub fetch_delay_ms: u64,
    /// Year used to expand `M-D` chart keys into full dates.
    pub chart_year: i32,
    /// Maximum number of rendered views the dashboard controller memoizes.
    pub view_cache_size: usize,
}
