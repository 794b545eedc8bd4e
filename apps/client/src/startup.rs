//! The startup pipeline.
//!
//! Steps run strictly in order and the first failing gate aborts the rest:
//! logging, screen baseline, start screen, board, decks, UI, a diagnostic read
//! of the game phase, and finally arming the screen transition.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::config::ClientConfig;
use crate::controls::StartControl;
use crate::error::{StartupError, Subsystem, SubsystemError};
use crate::screens::{ScreenRegistry, SharedScreens, START_SCREEN};
use crate::subsystems::{
    BoardSubsystem, DeckSubsystem, GameStateAccessor, LoggingInitializer, UiSubsystem,
};
use crate::transition::{ScreenTransition, TransitionHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupStep {
    Logging,
    Baseline,
    StartScreen,
    Board,
    Deck,
    Ui,
    Diagnostics,
    Armed,
}

impl StartupStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartupStep::Logging => "logging",
            StartupStep::Baseline => "baseline",
            StartupStep::StartScreen => "start_screen",
            StartupStep::Board => "board",
            StartupStep::Deck => "deck",
            StartupStep::Ui => "ui",
            StartupStep::Diagnostics => "diagnostics",
            StartupStep::Armed => "armed",
        }
    }
}

impl fmt::Display for StartupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for [`Startup`] (used by the binary and by tests).
pub struct StartupBuilder {
    config: ClientConfig,
    logging: Option<Arc<dyn LoggingInitializer>>,
    board: Option<Arc<dyn BoardSubsystem>>,
    deck: Option<Arc<dyn DeckSubsystem>>,
    ui: Option<Arc<dyn UiSubsystem>>,
    game: Option<Arc<dyn GameStateAccessor>>,
    screens: Option<SharedScreens>,
    control: Option<Arc<StartControl>>,
}

impl StartupBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            logging: None,
            board: None,
            deck: None,
            ui: None,
            game: None,
            screens: None,
            control: None,
        }
    }
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_logging(mut self, logging: Arc<dyn LoggingInitializer>) -> Self {
        self.logging = Some(logging);
        self
    }
    pub fn with_board(mut self, board: Arc<dyn BoardSubsystem>) -> Self {
        self.board = Some(board);
        self
    }
    pub fn with_deck(mut self, deck: Arc<dyn DeckSubsystem>) -> Self {
        self.deck = Some(deck);
        self
    }
    pub fn with_ui(mut self, ui: Arc<dyn UiSubsystem>) -> Self {
        self.ui = Some(ui);
        self
    }
    pub fn with_game_state(mut self, game: Arc<dyn GameStateAccessor>) -> Self {
        self.game = Some(game);
        self
    }
    /// Screens to drive; the default screen set is used when unset.
    pub fn with_screens(mut self, screens: SharedScreens) -> Self {
        self.screens = Some(screens);
        self
    }
    /// Without a start control only the timer can leave the start screen.
    pub fn with_start_control(mut self, control: Arc<StartControl>) -> Self {
        self.control = Some(control);
        self
    }

    pub fn build(self) -> Result<Startup, StartupError> {
        fn require<T>(value: Option<T>, what: &str) -> Result<T, StartupError> {
            value.ok_or_else(|| StartupError::config(format!("startup requires {what}")))
        }

        Ok(Startup {
            logging: require(self.logging, "a logging initializer")?,
            board: require(self.board, "a board subsystem")?,
            deck: require(self.deck, "a deck subsystem")?,
            ui: require(self.ui, "a UI subsystem")?,
            game: require(self.game, "a game state accessor")?,
            screens: self
                .screens
                .unwrap_or_else(|| ScreenRegistry::with_default_screens().into_shared()),
            control: self.control,
            config: self.config,
            armed: Mutex::new(None),
        })
    }
}

impl Default for StartupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_startup() -> StartupBuilder {
    StartupBuilder::new()
}

/// The startup orchestrator.
pub struct Startup {
    config: ClientConfig,
    logging: Arc<dyn LoggingInitializer>,
    board: Arc<dyn BoardSubsystem>,
    deck: Arc<dyn DeckSubsystem>,
    ui: Arc<dyn UiSubsystem>,
    game: Arc<dyn GameStateAccessor>,
    screens: SharedScreens,
    control: Option<Arc<StartControl>>,
    /// The transition armed by the latest successful run.
    armed: Mutex<Option<TransitionHandle>>,
}

impl Startup {
    pub fn screens(&self) -> SharedScreens {
        self.screens.clone()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Runs every step in order and, on success, hands over to the armed
    /// screen transition.
    pub async fn run(&self) -> Result<TransitionHandle, StartupError> {
        self.logging
            .init_logging()
            .map_err(StartupError::Logging)?;
        info!(step = %StartupStep::Logging, "logging system initialized");

        self.disarm_previous();
        self.reset_screens();
        self.show_start_screen();

        gate(Subsystem::Board, self.board.setup_board().await)?;
        info!(step = %StartupStep::Board, "board setup complete");

        gate(Subsystem::Deck, self.deck.setup_decks().await)?;
        info!(step = %StartupStep::Deck, "card decks initialized");

        gate(Subsystem::Ui, self.ui.initialize_ui())?;
        info!(step = %StartupStep::Ui, "ui initialization complete");

        let state = self.game.game_state();
        info!(
            step = %StartupStep::Diagnostics,
            phase = %state.phase,
            player_count = ?state.player_count,
            "current game state"
        );

        let handle = ScreenTransition::arm(
            self.config.transition_delay,
            self.screens.clone(),
            self.ui.clone(),
            self.control.as_deref(),
        );
        *self.armed.lock() = Some(handle.clone());
        info!(
            step = %StartupStep::Armed,
            delay_ms = self.config.transition_delay.as_millis() as u64,
            "client ready, player count screen follows"
        );
        Ok(handle)
    }

    /// A re-run voids the earlier transition: its timer must not fire into
    /// the new run's screens.
    fn disarm_previous(&self) {
        if let Some(previous) = self.armed.lock().take() {
            if previous.cancel_timer() {
                debug!("cancelled transition timer from the previous run");
            }
        }
    }

    fn reset_screens(&self) {
        let mut screens = self.screens.lock();
        screens.hide_all();
        info!(step = %StartupStep::Baseline, screens = screens.len(), "screens reset");
    }

    /// A missing start screen is logged and startup carries on.
    fn show_start_screen(&self) {
        match self.screens.lock().show(START_SCREEN) {
            Ok(()) => info!(step = %StartupStep::StartScreen, "start screen shown"),
            Err(e) => error!(
                step = %StartupStep::StartScreen,
                error = %e,
                "start screen element not found"
            ),
        }
    }
}

fn gate(subsystem: Subsystem, result: Result<bool, SubsystemError>) -> Result<(), StartupError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => {
            error!(%subsystem, "subsystem reported not ready");
            Err(StartupError::NotReady(subsystem))
        }
        Err(source) => {
            error!(%subsystem, error = %source, "subsystem initialization raised");
            Err(StartupError::Failed { subsystem, source })
        }
    }
}
