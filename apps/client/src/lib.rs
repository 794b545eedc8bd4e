#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod board;
pub mod boundary;
pub mod config;
pub mod controls;
pub mod decks;
pub mod error;
pub mod game;
pub mod host;
pub mod screens;
pub mod startup;
pub mod subsystems;
pub mod telemetry;
pub mod transition;
pub mod ui;


// Re-exports for public API
pub use boundary::{run_guarded, FallbackPanel};
pub use config::ClientConfig;
pub use controls::StartControl;
pub use error::{ScreenError, StartupError, Subsystem, SubsystemError};
pub use screens::{Screen, ScreenId, ScreenRegistry, SharedScreens};
pub use startup::{build_startup, Startup, StartupBuilder, StartupStep};
pub use transition::{
    ScreenTransition, TimerStatus, TransitionHandle, TransitionSource, TransitionState,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
