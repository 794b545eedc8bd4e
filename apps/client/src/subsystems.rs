//! Contracts of the collaborators the startup pipeline drives.
//!
//! Readiness is reported as `Ok(true)`. Both `Ok(false)` and `Err(_)` abort
//! startup; there is no retry and no partial success.

use async_trait::async_trait;

use crate::error::SubsystemError;
use crate::game::GameStateView;

/// Installs the process-wide diagnostic sink.
pub trait LoggingInitializer: Send + Sync {
    fn init_logging(&self) -> Result<(), SubsystemError>;
}

/// Prepares the board's rendering resources.
#[async_trait]
pub trait BoardSubsystem: Send + Sync {
    async fn setup_board(&self) -> Result<bool, SubsystemError>;
}

/// Prepares the card collections.
#[async_trait]
pub trait DeckSubsystem: Send + Sync {
    async fn setup_decks(&self) -> Result<bool, SubsystemError>;
}

/// Wires screens and input handling.
pub trait UiSubsystem: Send + Sync {
    fn initialize_ui(&self) -> Result<bool, SubsystemError>;

    /// Prepares the player-count screen's own widgets. Safe to call repeatedly.
    fn setup_player_count_ui(&self);
}

/// Read-only view of the game's state machine.
pub trait GameStateAccessor: Send + Sync {
    fn game_state(&self) -> GameStateView;
}
