//! Loading and validating the raw record snapshot handed to the engine.
//!
//! A snapshot is the full, immutable set of collections the dashboard works
//! from. It is read once, validated, and then only ever borrowed.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::records::{ContentRecord, CreatorRecord, DailyMetricRecord, TrackingConfig};
use crate::ConfigError;

/// On-disk encoding of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Yaml,
    Json,
}

impl SnapshotFormat {
    /// Pick the format from a file extension (`yaml`, `yml`, `json`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(SnapshotFormat::Yaml),
            "json" => Ok(SnapshotFormat::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    trackings: Vec<TrackingConfig>,
    #[serde(default)]
    creators: Vec<CreatorRecord>,
    #[serde(default)]
    contents: Vec<ContentRecord>,
    #[serde(default)]
    daily: Vec<DailyMetricRecord>,
}

/// Immutable bundle of raw collections plus the revision they were read at.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Hex SHA-256 of the bytes the snapshot was parsed from.
    pub revision: String,
    pub trackings: Vec<TrackingConfig>,
    pub creators: Vec<CreatorRecord>,
    pub contents: Vec<ContentRecord>,
    /// Ascending by day. Order is trusted, not checked.
    pub daily: Vec<DailyMetricRecord>,
}

impl Snapshot {
    #[must_use]
    pub fn tracking(&self, id: &str) -> Option<&TrackingConfig> {
        self.trackings.iter().find(|t| t.id == id)
    }
}

/// Load and validate a snapshot from a YAML or JSON file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, ConfigError> {
    let format = SnapshotFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SnapshotFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_snapshot(&content, format)
}

/// Parse and validate snapshot text that has already been read.
///
/// # Errors
///
/// Returns `ConfigError` if the text cannot be parsed or fails validation.
pub fn parse_snapshot(content: &str, format: SnapshotFormat) -> Result<Snapshot, ConfigError> {
    let file: SnapshotFile = match format {
        SnapshotFormat::Yaml => serde_yaml::from_str(content)?,
        SnapshotFormat::Json => serde_json::from_str(content)?,
    };

    validate_snapshot(&file)?;

    let snapshot = Snapshot {
        revision: format!("{:x}", Sha256::digest(content.as_bytes())),
        trackings: file.trackings,
        creators: file.creators,
        contents: file.contents,
        daily: file.daily,
    };

    tracing::debug!(
        revision = %snapshot.revision,
        trackings = snapshot.trackings.len(),
        creators = snapshot.creators.len(),
        contents = snapshot.contents.len(),
        days = snapshot.daily.len(),
        "snapshot loaded"
    );

    Ok(snapshot)
}

fn validate_snapshot(file: &SnapshotFile) -> Result<(), ConfigError> {
    let mut seen_trackings = HashSet::new();
    for tracking in &file.trackings {
        if tracking.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "tracking id must be non-empty".to_string(),
            ));
        }
        if !seen_trackings.insert(tracking.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate tracking id: '{}'",
                tracking.id
            )));
        }
    }

    let mut seen_contents = HashSet::new();
    for content in &file.contents {
        if content.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content id must be non-empty".to_string(),
            ));
        }
        if !seen_contents.insert(content.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate content id: '{}'",
                content.id
            )));
        }
    }

    let mut seen_days = HashSet::new();
    for day in &file.daily {
        if day.date.trim().is_empty() {
            return Err(ConfigError::Validation(
                "daily record date must be non-empty".to_string(),
            ));
        }
        if !seen_days.insert(day.date.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate daily date key: '{}'",
                day.date
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
