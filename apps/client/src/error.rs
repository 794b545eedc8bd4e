use std::fmt;

use thiserror::Error;

use crate::screens::ScreenId;

/// Collaborators whose readiness gates startup, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Board,
    Deck,
    Ui,
}

impl Subsystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subsystem::Board => "board",
            Subsystem::Deck => "deck",
            Subsystem::Ui => "UI",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure raised by a collaborator while it initializes.
#[derive(Error, Debug)]
pub enum SubsystemError {
    #[error("missing asset: {detail}")]
    Assets { detail: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

impl SubsystemError {
    pub fn assets(detail: impl Into<String>) -> Self {
        Self::Assets {
            detail: detail.into(),
        }
    }

    pub fn other(detail: impl Into<String>) -> Self {
        Self::Other(detail.into())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error("screen not found: {0}")]
    NotFound(ScreenId),
}

/// The single aggregated failure of the startup pipeline.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("logging init failed: {0}")]
    Logging(#[source] SubsystemError),
    #[error("{0} init failed")]
    NotReady(Subsystem),
    #[error("{subsystem} init failed: {source}")]
    Failed {
        subsystem: Subsystem,
        #[source]
        source: SubsystemError,
    },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Unexpected error: {detail}")]
    Unexpected { detail: String },
}

impl StartupError {
    /// Stable code for log correlation and the fallback panel.
    pub fn code(&self) -> &'static str {
        match self {
            StartupError::Logging(_) => "LOGGING_INIT_FAILED",
            StartupError::NotReady(subsystem) | StartupError::Failed { subsystem, .. } => {
                match subsystem {
                    Subsystem::Board => "BOARD_INIT_FAILED",
                    Subsystem::Deck => "DECK_INIT_FAILED",
                    Subsystem::Ui => "UI_INIT_FAILED",
                }
            }
            StartupError::Config { .. } => "CONFIG_ERROR",
            StartupError::Unexpected { .. } => "UNEXPECTED",
        }
    }

    /// The subsystem that aborted the pipeline, if the failure came from one.
    pub fn subsystem(&self) -> Option<Subsystem> {
        match self {
            StartupError::NotReady(subsystem) | StartupError::Failed { subsystem, .. } => {
                Some(*subsystem)
            }
            _ => None,
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::Unexpected {
            detail: detail.into(),
        }
    }
}
