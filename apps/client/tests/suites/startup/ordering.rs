use client::startup::StartupStep;
use client::transition::{TimerStatus, TransitionState};

use crate::support::Harness;

#[tokio::test(start_paused = true)]
async fn gates_run_in_fixed_order() {
    let harness = Harness::ready();

    harness.startup.run().await.expect("startup succeeds");

    assert_eq!(
        harness.log.calls(),
        vec![
            "logging",
            "board:start",
            "board:done",
            "deck:start",
            "deck:done",
            "ui:init",
            "game_state",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn deck_never_starts_before_board_finishes() {
    let harness = Harness::ready();

    harness.startup.run().await.unwrap();

    let board_done = harness.log.position("board:done").unwrap();
    let deck_start = harness.log.position("deck:start").unwrap();
    let ui_init = harness.log.position("ui:init").unwrap();
    assert!(board_done < deck_start);
    assert!(harness.log.position("deck:done").unwrap() < ui_init);
}

/// All subsystems ready: start screen up, timer armed with the configured delay.
#[tokio::test(start_paused = true)]
async fn success_arms_transition_on_start_screen() {
    let harness = Harness::ready();

    let handle = harness.startup.run().await.unwrap();

    assert_eq!(harness.visible(), vec!["start-screen"]);
    assert_eq!(handle.state(), TransitionState::Waiting);
    assert_eq!(handle.timer_status(), TimerStatus::Armed);
    assert_eq!(handle.delay(), harness.startup.config().transition_delay);
    assert_eq!(handle.delay().as_millis(), 3000);
    assert!(harness.control.has_handler());
    assert!(!harness.log.contains("ui:player_count"));
}

#[test]
fn step_names_are_stable() {
    let names: Vec<&str> = [
        StartupStep::Logging,
        StartupStep::Baseline,
        StartupStep::StartScreen,
        StartupStep::Board,
        StartupStep::Deck,
        StartupStep::Ui,
        StartupStep::Diagnostics,
        StartupStep::Armed,
    ]
    .iter()
    .map(StartupStep::as_str)
    .collect();
    assert_eq!(
        names,
        vec![
            "logging",
            "baseline",
            "start_screen",
            "board",
            "deck",
            "ui",
            "diagnostics",
            "armed"
        ]
    );
}
