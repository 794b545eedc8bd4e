//! Terminal rendition of the client's interface.

use std::ops::RangeInclusive;

use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::error::SubsystemError;
use crate::screens::{SharedScreens, DEFAULT_SCREENS};
use crate::subsystems::UiSubsystem;

pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCountOptions {
    pub counts: RangeInclusive<u8>,
}

impl Default for PlayerCountOptions {
    fn default() -> Self {
        Self {
            counts: MIN_PLAYERS..=MAX_PLAYERS,
        }
    }
}

#[derive(Debug, Default)]
struct UiState {
    initialized: bool,
    player_count: Option<PlayerCountOptions>,
}

/// Default [`UiSubsystem`].
///
/// `initialize_ui` checks that every screen the game navigates to is
/// registered; the player-count widgets are prepared on demand.
#[derive(Debug)]
pub struct TerminalUi {
    screens: SharedScreens,
    required: Vec<&'static str>,
    state: Mutex<UiState>,
}

impl TerminalUi {
    pub fn new(screens: SharedScreens) -> Self {
        Self {
            screens,
            required: DEFAULT_SCREENS.to_vec(),
            state: Mutex::new(UiState::default()),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state.lock().initialized
    }

    /// Options shown once the player-count screen has been prepared.
    pub fn player_count_options(&self) -> Option<PlayerCountOptions> {
        self.state.lock().player_count.clone()
    }

    /// Text for whichever screen is currently visible.
    pub fn render(&self) -> String {
        let screens = self.screens.lock();
        let visible = screens.visible_ids();
        let Some(id) = visible.first() else {
            return String::from("(no screen visible)");
        };

        let mut out = format!("== {id} ==");
        if id.as_str() == crate::screens::PLAYER_COUNT_SCREEN {
            if let Some(options) = self.player_count_options() {
                out.push_str(&format!(
                    "\nHow many players? ({}-{})",
                    options.counts.start(),
                    options.counts.end()
                ));
            }
        }
        out
    }
}

impl UiSubsystem for TerminalUi {
    fn initialize_ui(&self) -> Result<bool, SubsystemError> {
        let missing: Vec<&str> = {
            let screens = self.screens.lock();
            self.required
                .iter()
                .copied()
                .filter(|id| !screens.contains(id))
                .collect()
        };
        if !missing.is_empty() {
            error!(?missing, "required screens are not registered");
            return Ok(false);
        }

        self.state.lock().initialized = true;
        info!(screens = self.required.len(), "ui wired");
        Ok(true)
    }

    fn setup_player_count_ui(&self) {
        let mut state = self.state.lock();
        if state.player_count.is_some() {
            debug!("player count ui already prepared");
            return;
        }
        let options = PlayerCountOptions::default();
        debug!(min = options.counts.start(), max = options.counts.end(), "player count ui prepared");
        state.player_count = Some(options);
    }
}
