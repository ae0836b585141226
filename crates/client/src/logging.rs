//! File-based tracing setup.
//!
//! The terminal belongs to the game, so log output goes to a per-session file
//! only.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "client.log";

/// Installs the global subscriber and returns the log file path.
pub fn setup_logging(log_dir: Option<&Path>, session_id: &str) -> Result<PathBuf> {
    let session_log_dir = log_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(default_log_directory)
        .join(session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!("failed to create log directory {}", session_log_dir.display())
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    // Keep the writer alive for the rest of the process.
    std::mem::forget(guard);

    let log_file = session_log_dir.join(LOG_FILE);
    tracing::info!(session = session_id, file = %log_file.display(), "logging initialized");
    Ok(log_file)
}

/// Platform cache directory, e.g. `~/.cache/space-escape/logs` on Linux.
fn default_log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "space-escape")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("space-escape").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lands_in_the_session_directory() {
        let dir = tempfile::tempdir().unwrap();

        let path = setup_logging(Some(dir.path()), "session_test").unwrap();

        assert_eq!(path, dir.path().join("session_test").join(LOG_FILE));
        assert!(dir.path().join("session_test").is_dir());
    }
}
