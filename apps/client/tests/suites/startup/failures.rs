use client::boundary::{run_guarded, FallbackPanel};
use client::error::{StartupError, Subsystem};

use crate::support::{Harness, HarnessOptions, Readiness};

#[tokio::test(start_paused = true)]
async fn board_not_ready_stops_everything_after_it() {
    let harness = Harness::scripted(Readiness::NotReady, Readiness::Ready, Readiness::Ready);

    let err = harness.startup.run().await.unwrap_err();

    assert!(matches!(err, StartupError::NotReady(Subsystem::Board)));
    assert_eq!(err.to_string(), "board init failed");
    assert!(!harness.log.contains("deck:start"));
    assert!(!harness.log.contains("ui:init"));
    assert!(!harness.log.contains("game_state"));
    assert!(!harness.control.has_handler(), "no transition is armed");
}

#[tokio::test(start_paused = true)]
async fn deck_failure_prevents_ui_init() {
    let harness = Harness::scripted(Readiness::Ready, Readiness::NotReady, Readiness::Ready);

    let err = harness.startup.run().await.unwrap_err();

    assert_eq!(err.to_string(), "deck init failed");
    assert!(harness.log.contains("board:done"));
    assert!(!harness.log.contains("ui:init"));
}

#[tokio::test(start_paused = true)]
async fn ui_not_ready_is_fatal() {
    let harness = Harness::scripted(Readiness::Ready, Readiness::Ready, Readiness::NotReady);

    let err = harness.startup.run().await.unwrap_err();

    assert_eq!(err.to_string(), "UI init failed");
    assert_eq!(err.subsystem(), Some(Subsystem::Ui));
    assert!(!harness.log.contains("game_state"));
}

#[tokio::test(start_paused = true)]
async fn raised_errors_are_named_by_subsystem() {
    let harness = Harness::scripted(Readiness::Ready, Readiness::Raises, Readiness::Ready);

    let err = harness.startup.run().await.unwrap_err();

    assert_eq!(err.code(), "DECK_INIT_FAILED");
    assert_eq!(err.to_string(), "deck init failed: deck exploded");
}

#[tokio::test(start_paused = true)]
async fn logging_failure_aborts_before_any_screen_work() {
    let harness = Harness::build(HarnessOptions {
        logging_fails: true,
        ..HarnessOptions::default()
    });

    let err = harness.startup.run().await.unwrap_err();

    assert!(matches!(err, StartupError::Logging(_)));
    assert_eq!(err.code(), "LOGGING_INIT_FAILED");
    assert_eq!(err.to_string(), "logging init failed: log sink unavailable");
    assert_eq!(harness.log.calls(), vec!["logging"]);
    assert!(harness.visible().is_empty(), "baseline never ran");
    assert!(!harness.control.has_handler());
}

#[tokio::test(start_paused = true)]
async fn board_raising_stops_before_decks() {
    let harness = Harness::scripted(Readiness::Raises, Readiness::Ready, Readiness::Ready);

    let err = harness.startup.run().await.unwrap_err();

    assert_eq!(err.code(), "BOARD_INIT_FAILED");
    assert_eq!(err.subsystem(), Some(Subsystem::Board));
    assert_eq!(err.to_string(), "board init failed: board exploded");
    assert!(harness.log.contains("board:done"));
    assert!(!harness.log.contains("deck:start"));
    assert!(!harness.control.has_handler());
}

/// The start screen stays up when startup fails; the boundary swaps in the panel.
#[tokio::test(start_paused = true)]
async fn boundary_renders_fallback_for_failed_startup() {
    let harness = Harness::scripted(Readiness::NotReady, Readiness::Ready, Readiness::Ready);

    let err = run_guarded(harness.startup.run()).await.unwrap_err();
    let panel = FallbackPanel::from_error(&err);

    assert_eq!(panel.title, "Setup Error");
    assert_eq!(panel.code, "BOARD_INIT_FAILED");
    assert!(panel.to_string().contains("Error: board init failed"));
    assert_eq!(harness.visible(), vec!["start-screen"]);
}
