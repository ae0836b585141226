//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Settings the binary needs before a session can start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding `level.ron`, `catalog.ron` and `config.toml`.
    pub data_dir: Option<PathBuf>,
    /// Base seed for every random draw; derived from the clock when unset.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SPACE_ESCAPE_DATA_DIR` - Content directory (default: built-in asteroid)
    /// - `SPACE_ESCAPE_SEED` - Session seed (default: system clock)
    /// - `SPACE_ESCAPE_SESSION_ID` - Session identifier for log files (default: timestamp)
    /// - `SPACE_ESCAPE_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("SPACE_ESCAPE_DATA_DIR").map(PathBuf::from),
            seed: read_env::<u64>("SPACE_ESCAPE_SEED"),
            session_id: env::var("SPACE_ESCAPE_SESSION_ID")
                .ok()
                .filter(|id| !id.trim().is_empty()),
            log_dir: env::var_os("SPACE_ESCAPE_LOG_DIR").map(PathBuf::from),
        }
    }

    /// The configured seed, or one taken from the system clock.
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| unix_time().as_nanos() as u64)
    }

    /// The configured session id, or `session_<unix seconds>`.
    pub fn session_id_or_timestamp(&self) -> String {
        self.session_id
            .clone()
            .unwrap_or_else(|| format!("session_{}", unix_time().as_secs()))
    }
}

fn unix_time() -> std::time::Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_win_over_fallbacks() {
        let config = ClientConfig {
            seed: Some(42),
            session_id: Some("demo".into()),
            ..ClientConfig::default()
        };

        assert_eq!(config.seed_or_clock(), 42);
        assert_eq!(config.session_id_or_timestamp(), "demo");
    }

    #[test]
    fn generated_session_ids_are_timestamped() {
        let id = ClientConfig::default().session_id_or_timestamp();
        assert!(id.starts_with("session_"));
        assert!(id["session_".len()..].parse::<u64>().is_ok());
    }
}
