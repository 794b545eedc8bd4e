//! Read-only access to the game's phase.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::subsystems::GameStateAccessor;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Players and roles not chosen yet.
    Setup,
    Playing,
    GameOver,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Setup => "SETUP",
            GamePhase::Playing => "PLAYING",
            GamePhase::GameOver => "GAME_OVER",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStateView {
    pub phase: GamePhase,
    pub player_count: Option<u8>,
}

impl Default for GameStateView {
    fn default() -> Self {
        Self {
            phase: GamePhase::Setup,
            player_count: None,
        }
    }
}

/// Game state shared between the rules engine and its readers.
#[derive(Debug, Clone, Default)]
pub struct SharedGameState {
    inner: Arc<RwLock<GameStateView>>,
}

impl SharedGameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer side, owned by the rules engine.
    pub fn update(&self, f: impl FnOnce(&mut GameStateView)) {
        f(&mut self.inner.write());
    }
}

impl GameStateAccessor for SharedGameState {
    fn game_state(&self) -> GameStateView {
        self.inner.read().clone()
    }
}
