//! Start screen → player-count screen state machine.
//!
//! Two sources race to advance the machine: a one-shot timer armed when
//! startup completes, and the manual start control. Whichever comes first
//! performs the transition; the other becomes a no-op. The manual handler
//! cancels the timer before advancing, and the transition action itself
//! refuses to run twice.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::controls::StartControl;
use crate::screens::{SharedScreens, PLAYER_COUNT_SCREEN};
use crate::subsystems::UiSubsystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// Start screen shown, timer armed.
    Waiting,
    /// Player-count screen shown. Terminal.
    Transitioned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionSource {
    Timer,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Armed,
    Fired,
    Cancelled,
}

const ARMED: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

/// One-shot delayed action.
///
/// `Armed` moves to exactly one of `Fired` or `Cancelled` and never back.
#[derive(Debug, Clone)]
pub struct TransitionTimer {
    status: Arc<AtomicU8>,
    token: CancellationToken,
    delay: Duration,
}

impl TransitionTimer {
    /// Spawns the timer task on the current runtime.
    pub fn schedule<F>(delay: Duration, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let status = Arc::new(AtomicU8::new(ARMED));
        let token = CancellationToken::new();

        let task_status = status.clone();
        let task_token = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;

                _ = task_token.cancelled() => {
                    debug!("transition timer cancelled before firing");
                }
                _ = tokio::time::sleep(delay) => {
                    if task_status
                        .compare_exchange(ARMED, FIRED, Ordering::SeqCst, Ordering::SeqCst)
                        .is_ok()
                    {
                        on_fire();
                    }
                }
            }
        });

        debug!(delay_ms = delay.as_millis() as u64, "transition timer armed");
        Self {
            status,
            token,
            delay,
        }
    }

    /// Cancels a still-armed timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&self) -> bool {
        let cancelled = self
            .status
            .compare_exchange(ARMED, CANCELLED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();
        if cancelled {
            self.token.cancel();
        }
        cancelled
    }

    pub fn status(&self) -> TimerStatus {
        match self.status.load(Ordering::SeqCst) {
            ARMED => TimerStatus::Armed,
            FIRED => TimerStatus::Fired,
            _ => TimerStatus::Cancelled,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[derive(Debug)]
struct Progress {
    state: TransitionState,
    source: Option<TransitionSource>,
}

struct Machine {
    progress: Mutex<Progress>,
    advances: AtomicUsize,
    screens: SharedScreens,
    ui: Arc<dyn UiSubsystem>,
    notify: watch::Sender<TransitionState>,
}

impl Machine {
    fn advance(&self, source: TransitionSource) -> bool {
        {
            let mut progress = self.progress.lock();
            if progress.state == TransitionState::Transitioned {
                debug!(?source, won_by = ?progress.source, "transition already done");
                return false;
            }
            progress.state = TransitionState::Transitioned;
            progress.source = Some(source);
        }
        self.advances.fetch_add(1, Ordering::SeqCst);

        info!(?source, "showing player count screen");
        self.ui.setup_player_count_ui();

        {
            let mut screens = self.screens.lock();
            screens.hide_all();
            match screens.show(PLAYER_COUNT_SCREEN) {
                Ok(()) => info!(screen = PLAYER_COUNT_SCREEN, "player count screen displayed"),
                Err(e) => error!(error = %e, "player count screen element not found"),
            }
        }

        self.notify.send_replace(TransitionState::Transitioned);
        true
    }
}

/// Entry point of the state machine.
pub struct ScreenTransition;

impl ScreenTransition {
    /// Enters `Waiting`: arms the timer and attaches the manual handler.
    ///
    /// The start screen is expected to be showing already. Without a control
    /// only the timer can advance the machine.
    pub fn arm(
        delay: Duration,
        screens: SharedScreens,
        ui: Arc<dyn UiSubsystem>,
        control: Option<&StartControl>,
    ) -> TransitionHandle {
        let (notify, _) = watch::channel(TransitionState::Waiting);
        let machine = Arc::new(Machine {
            progress: Mutex::new(Progress {
                state: TransitionState::Waiting,
                source: None,
            }),
            advances: AtomicUsize::new(0),
            screens,
            ui,
            notify,
        });

        let timer_machine = machine.clone();
        let timer = TransitionTimer::schedule(delay, move || {
            info!("transition timer fired");
            timer_machine.advance(TransitionSource::Timer);
        });

        match control {
            Some(control) => {
                let click_machine = machine.clone();
                let click_timer = timer.clone();
                control.replace_handler(move || {
                    info!("start control clicked, skipping the wait");
                    click_timer.cancel();
                    click_machine.advance(TransitionSource::Manual);
                });
            }
            None => error!("start control not found, relying on the transition timer"),
        }

        TransitionHandle { machine, timer }
    }
}

/// Observer and control surface for an armed machine.
#[derive(Clone)]
pub struct TransitionHandle {
    machine: Arc<Machine>,
    timer: TransitionTimer,
}

impl TransitionHandle {
    pub fn state(&self) -> TransitionState {
        self.machine.progress.lock().state
    }

    /// Which source won the race, once one has.
    pub fn transitioned_by(&self) -> Option<TransitionSource> {
        self.machine.progress.lock().source
    }

    pub fn timer_status(&self) -> TimerStatus {
        self.timer.status()
    }

    pub fn delay(&self) -> Duration {
        self.timer.delay()
    }

    /// How many times the transition action actually ran (0 or 1).
    pub fn advance_count(&self) -> usize {
        self.machine.advances.load(Ordering::SeqCst)
    }

    /// Disarms the timer if it has not fired yet.
    pub fn cancel_timer(&self) -> bool {
        self.timer.cancel()
    }

    /// Runs the transition action directly. A no-op once transitioned.
    pub fn advance(&self, source: TransitionSource) -> bool {
        self.machine.advance(source)
    }

    /// Resolves once the machine has reached `Transitioned`.
    pub async fn transitioned(&self) -> Option<TransitionSource> {
        let mut rx = self.machine.notify.subscribe();
        // The sender lives in `machine`, which `self` keeps alive.
        let _ = rx
            .wait_for(|state| *state == TransitionState::Transitioned)
            .await;
        self.transitioned_by()
    }
}

impl std::fmt::Debug for TransitionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionHandle")
            .field("state", &self.state())
            .field("timer", &self.timer_status())
            .field("delay", &self.delay())
            .finish()
    }
}
