//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::StartupError;

/// Delay before the start screen advances on its own.
pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub transition_delay: Duration,
    /// Directory holding board images and `decks.json`. Built-ins are used when unset.
    pub asset_dir: Option<PathBuf>,
    /// Fixed shuffle seed; a random one is drawn when unset.
    pub deck_seed: Option<u64>,
    pub log_format: LogFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            transition_delay: DEFAULT_TRANSITION_DELAY,
            asset_dir: None,
            deck_seed: None,
            log_format: LogFormat::default(),
        }
    }
}

impl ClientConfig {
    /// Load and validate configuration from the environment.
    pub fn from_env() -> Result<Self, StartupError> {
        let transition_delay = parse_var::<u64>("CRITOCRACY_TRANSITION_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TRANSITION_DELAY);

        let asset_dir = env::var("CRITOCRACY_ASSET_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let deck_seed = parse_var::<u64>("CRITOCRACY_DECK_SEED")?;

        let log_format = parse_var::<LogFormat>("CRITOCRACY_LOG_FORMAT")?.unwrap_or_default();

        Ok(ClientConfig {
            transition_delay,
            asset_dir,
            deck_seed,
            log_format,
        })
    }

    pub fn with_transition_delay(mut self, delay: Duration) -> Self {
        self.transition_delay = delay;
        self
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>, StartupError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| StartupError::config(format!("{name} is invalid ('{raw}'): {e}"))),
        Err(_) => Ok(None),
    }
}
