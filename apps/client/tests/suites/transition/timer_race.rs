use std::time::Duration;

use client::screens::{PLAYER_COUNT_SCREEN, START_SCREEN};
use client::transition::{TimerStatus, TransitionSource, TransitionState};
use tokio::time::sleep;

use crate::support::Harness;

/// No click: after the delay the player-count screen is the only one visible.
#[tokio::test(start_paused = true)]
async fn timer_advances_after_delay() {
    let harness = Harness::ready();
    let handle = harness.startup.run().await.unwrap();

    sleep(Duration::from_millis(2900)).await;
    assert_eq!(handle.state(), TransitionState::Waiting);
    assert_eq!(harness.visible(), vec![START_SCREEN]);

    sleep(Duration::from_millis(200)).await;
    assert_eq!(handle.state(), TransitionState::Transitioned);
    assert_eq!(handle.transitioned_by(), Some(TransitionSource::Timer));
    assert_eq!(handle.timer_status(), TimerStatus::Fired);
    assert_eq!(harness.visible(), vec![PLAYER_COUNT_SCREEN]);
    assert_eq!(harness.log.count("ui:player_count"), 1);
}

/// Click at 500 ms: immediate transition, nothing more happens at 3000 ms.
#[tokio::test(start_paused = true)]
async fn click_wins_and_cancels_timer() {
    let harness = Harness::ready();
    let handle = harness.startup.run().await.unwrap();

    sleep(Duration::from_millis(500)).await;
    assert!(harness.control.click());

    assert_eq!(handle.state(), TransitionState::Transitioned);
    assert_eq!(handle.transitioned_by(), Some(TransitionSource::Manual));
    assert_eq!(handle.timer_status(), TimerStatus::Cancelled);
    assert_eq!(harness.visible(), vec![PLAYER_COUNT_SCREEN]);

    sleep(Duration::from_millis(3000)).await;
    assert_eq!(handle.timer_status(), TimerStatus::Cancelled);
    assert_eq!(handle.advance_count(), 1);
    assert_eq!(harness.log.count("ui:player_count"), 1);
    assert_eq!(harness.visible(), vec![PLAYER_COUNT_SCREEN]);
}

#[tokio::test(start_paused = true)]
async fn late_click_after_timer_is_a_no_op() {
    let harness = Harness::ready();
    let handle = harness.startup.run().await.unwrap();

    sleep(Duration::from_millis(3100)).await;
    assert_eq!(handle.transitioned_by(), Some(TransitionSource::Timer));

    assert!(harness.control.click(), "handler still attached");
    assert_eq!(handle.advance_count(), 1);
    assert_eq!(handle.transitioned_by(), Some(TransitionSource::Timer));
    assert_eq!(handle.timer_status(), TimerStatus::Fired);
}

#[tokio::test(start_paused = true)]
async fn second_advance_from_losing_source_does_nothing() {
    let harness = Harness::ready();
    let handle = harness.startup.run().await.unwrap();

    assert!(handle.advance(TransitionSource::Manual));
    assert!(!handle.advance(TransitionSource::Timer));
    assert!(!handle.advance(TransitionSource::Manual));

    assert_eq!(handle.advance_count(), 1);
    assert_eq!(harness.log.count("ui:player_count"), 1);
}

#[tokio::test(start_paused = true)]
async fn repeated_clicks_transition_once() {
    let harness = Harness::ready();
    let handle = harness.startup.run().await.unwrap();

    for _ in 0..5 {
        harness.control.click();
    }
    sleep(Duration::from_millis(5000)).await;

    assert_eq!(handle.advance_count(), 1);
    assert_eq!(harness.visible(), vec![PLAYER_COUNT_SCREEN]);
}

#[tokio::test(start_paused = true)]
async fn transitioned_resolves_with_winning_source() {
    let harness = Harness::ready();
    let handle = harness.startup.run().await.unwrap();

    let source = handle.transitioned().await;

    assert_eq!(source, Some(TransitionSource::Timer));
    assert_eq!(harness.visible(), vec![PLAYER_COUNT_SCREEN]);
}

/// Re-running startup replaces the click handler and disarms the earlier
/// timer, so a click mid-wait transitions exactly once for good.
#[tokio::test(start_paused = true)]
async fn rearming_keeps_a_single_click_handler() {
    let harness = Harness::ready();
    let first = harness.startup.run().await.unwrap();
    let second = harness.startup.run().await.unwrap();
    assert_eq!(first.timer_status(), TimerStatus::Cancelled);

    sleep(Duration::from_millis(500)).await;
    assert!(harness.control.click());
    assert_eq!(second.transitioned_by(), Some(TransitionSource::Manual));

    sleep(Duration::from_millis(3000)).await;
    assert_eq!(first.advance_count(), 0);
    assert_eq!(first.timer_status(), TimerStatus::Cancelled);
    assert_eq!(second.advance_count(), 1);
    assert_eq!(second.timer_status(), TimerStatus::Cancelled);
    assert_eq!(harness.log.count("ui:player_count"), 1);
    assert_eq!(harness.visible(), vec![PLAYER_COUNT_SCREEN]);
}

/// Without a click only the latest run's timer fires.
#[tokio::test(start_paused = true)]
async fn rerun_without_click_transitions_once_on_latest_timer() {
    let harness = Harness::ready();
    let first = harness.startup.run().await.unwrap();
    let second = harness.startup.run().await.unwrap();

    sleep(Duration::from_millis(4000)).await;

    assert_eq!(first.state(), TransitionState::Waiting);
    assert_eq!(first.timer_status(), TimerStatus::Cancelled);
    assert_eq!(second.transitioned_by(), Some(TransitionSource::Timer));
    assert_eq!(harness.log.count("ui:player_count"), 1);
}
