//! Glue between the terminal and the start control.
//!
//! Stdin is read on a detached OS thread so a pending read never holds the
//! runtime open: once the transition happens the binary returns and the
//! process exits whether or not a line ever arrives.

use std::io::{BufRead, BufReader};
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::controls::StartControl;
use crate::transition::{TransitionHandle, TransitionSource};

/// Forwards one click per line of `input` until it closes or the receiver goes away.
pub fn spawn_line_clicks<R>(input: R) -> mpsc::UnboundedReceiver<()>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let spawned = thread::Builder::new()
        .name("stdin-clicks".into())
        .spawn(move || {
            for line in input.lines() {
                if line.is_err() || tx.send(()).is_err() {
                    break;
                }
            }
            debug!("click input closed");
        });
    if let Err(e) = spawned {
        warn!(error = %e, "could not start the click reader, only the timer can advance");
    }
    rx
}

pub fn spawn_stdin_clicks() -> mpsc::UnboundedReceiver<()> {
    spawn_line_clicks(BufReader::new(std::io::stdin()))
}

/// Delivers clicks to `control` on the runtime thread until the machine
/// transitions, by whichever source.
pub async fn wait_for_start(
    handle: &TransitionHandle,
    control: &StartControl,
    mut clicks: mpsc::UnboundedReceiver<()>,
) -> Option<TransitionSource> {
    let transitioned = handle.transitioned();
    tokio::pin!(transitioned);
    loop {
        tokio::select! {
            biased;

            source = &mut transitioned => return source,
            Some(()) = clicks.recv() => {
                control.click();
            }
        }
    }
}
