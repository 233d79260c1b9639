//! Shared record types, configuration and snapshot loading for trackdash.
//!
//! Everything here is plain data: the analytics engine in
//! `trackdash-analytics` borrows these records immutably and never writes back.

mod app_config;
mod config;
pub mod records;
pub mod snapshot;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{
    ContentRecord, CreatorRecord, DailyMetricRecord, TrackingConfig, TrackingStatus,
};
pub use snapshot::{load_snapshot, parse_snapshot, Snapshot, SnapshotFormat};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read snapshot file {path}: {source}")]
    SnapshotFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot YAML: {0}")]
    SnapshotYaml(#[from] serde_yaml::Error),

    #[error("failed to parse snapshot JSON: {0}")]
    SnapshotJson(#[from] serde_json::Error),

    #[error("unsupported snapshot format: {0}")]
    UnsupportedFormat(String),

    #[error("snapshot validation failed: {0}")]
    Validation(String),
}
