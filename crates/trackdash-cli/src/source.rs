//! Asynchronous acquisition of the raw snapshot.
//!
//! This is the only suspension point in the program: the file is read on the
//! tokio runtime, an optional artificial delay stands in for network latency,
//! and the parsed snapshot is handed to the synchronous engine.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use trackdash_core::{parse_snapshot, Snapshot, SnapshotFormat};

/// Read, parse and validate the snapshot at `path`.
///
/// # Errors
///
/// Returns an error if the extension is not a known snapshot format, the file
/// cannot be read, or its contents fail parsing or validation.
pub(crate) async fn fetch_snapshot(path: &Path, delay_ms: u64) -> anyhow::Result<Snapshot> {
    let format = SnapshotFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;

    if delay_ms > 0 {
        tracing::debug!(delay_ms, "simulating fetch latency");
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    let snapshot = parse_snapshot(&content, format)?;
    tracing::info!(
        path = %path.display(),
        revision = %snapshot.revision,
        contents = snapshot.contents.len(),
        "snapshot fetched"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn shipped_snapshot() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("data")
            .join("snapshot.yaml")
    }

    #[tokio::test]
    async fn fetches_shipped_snapshot() {
        let snapshot = fetch_snapshot(&shipped_snapshot(), 0)
            .await
            .expect("shipped snapshot loads");
        assert_eq!(snapshot.trackings.len(), 2);
        assert_eq!(snapshot.contents.len(), 24);
    }

    #[tokio::test]
    async fn delay_does_not_change_result() {
        let snapshot = fetch_snapshot(&shipped_snapshot(), 5).await.unwrap();
        assert_eq!(snapshot.daily.len(), 21);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = fetch_snapshot(Path::new("/nonexistent/snapshot.yaml"), 0)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("failed to read snapshot"));
    }

    #[tokio::test]
    async fn unknown_extension_is_an_error() {
        assert!(fetch_snapshot(Path::new("snapshot.toml"), 0).await.is_err());
    }
}
