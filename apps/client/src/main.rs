use std::process::ExitCode;
use std::sync::Arc;

use client::board::BoardAssets;
use client::boundary::{run_guarded, FallbackPanel};
use client::config::ClientConfig;
use client::controls::StartControl;
use client::decks::CardDecks;
use client::game::SharedGameState;
use client::host::{spawn_stdin_clicks, wait_for_start};
use client::screens::ScreenRegistry;
use client::startup::build_startup;
use client::telemetry::TracingLogging;
use client::ui::TerminalUi;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", FallbackPanel::from_error(&e));
            return ExitCode::FAILURE;
        }
    };

    let screens = ScreenRegistry::with_default_screens().into_shared();
    let control = Arc::new(StartControl::new());
    let ui = Arc::new(TerminalUi::new(screens.clone()));

    let startup = build_startup()
        .with_logging(Arc::new(TracingLogging::new(config.log_format)))
        .with_board(Arc::new(BoardAssets::new(config.asset_dir.clone())))
        .with_deck(Arc::new(CardDecks::new(
            config.asset_dir.clone(),
            config.deck_seed,
        )))
        .with_ui(ui.clone())
        .with_game_state(Arc::new(SharedGameState::new()))
        .with_screens(screens)
        .with_start_control(control.clone())
        .with_config(config);

    let guarded = run_guarded(async {
        let startup = startup.build()?;
        startup.run().await
    });
    let handle = match guarded.await {
        Ok(handle) => handle,
        Err(e) => {
            println!("{}", FallbackPanel::from_error(&e));
            return ExitCode::FAILURE;
        }
    };

    println!("{}", ui.render());
    println!("Press Enter to start now.");

    // Each line on stdin is a click on the start control.
    let clicks = spawn_stdin_clicks();
    let source = wait_for_start(&handle, &control, clicks).await;
    info!(?source, "left the start screen");

    println!("{}", ui.render());
    ExitCode::SUCCESS
}
