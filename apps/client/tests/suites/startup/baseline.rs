use client::screens::{ScreenRegistry, END_GAME_SCREEN, START_SCREEN};

use crate::support::{Harness, Readiness};

#[tokio::test(start_paused = true)]
async fn stale_screens_are_hidden_before_start_screen_shows() {
    let mut registry = ScreenRegistry::with_default_screens();
    registry.show(END_GAME_SCREEN).unwrap();
    let harness = Harness::with_screens(
        Readiness::Ready,
        Readiness::Ready,
        Readiness::Ready,
        registry.into_shared(),
    );

    harness.startup.run().await.unwrap();

    assert_eq!(harness.visible(), vec![START_SCREEN]);
    let screens = harness.screens.lock();
    let end = screens.get(END_GAME_SCREEN).unwrap();
    assert!(!end.active);
    assert_eq!(end.opacity, 0.0);
}

#[tokio::test(start_paused = true)]
async fn missing_start_screen_is_not_fatal() {
    let mut registry = ScreenRegistry::with_default_screens();
    registry.remove(START_SCREEN);
    let harness = Harness::with_screens(
        Readiness::Ready,
        Readiness::Ready,
        Readiness::Ready,
        registry.into_shared(),
    );

    let handle = harness.startup.run().await;

    assert!(handle.is_ok(), "startup continues without a start screen");
    assert!(harness.visible().is_empty());
    assert!(harness.log.contains("ui:init"));
}

#[tokio::test(start_paused = true)]
async fn running_startup_twice_still_leaves_one_screen() {
    let harness = Harness::ready();

    harness.startup.run().await.unwrap();
    harness.startup.run().await.unwrap();

    assert_eq!(harness.visible(), vec![START_SCREEN]);
    assert_eq!(harness.log.count("board:start"), 2);
}
