//! The outermost failure boundary.
//!
//! Only the top-level caller uses this. Anything the pipeline propagates, and
//! any panic inside it, ends here and is turned into the fixed fallback panel.
//! A failed startup is terminal for the session.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tracing::error;

use crate::error::StartupError;

pub const FALLBACK_TITLE: &str = "Setup Error";
pub const FALLBACK_GUIDANCE: &str =
    "Could not prepare the game interface. Check the log output for details and try restarting.";

/// Awaits `fut`, converting a panic into [`StartupError::Unexpected`].
pub async fn run_guarded<T, F>(fut: F) -> Result<T, StartupError>
where
    F: Future<Output = Result<T, StartupError>>,
{
    let result = match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(StartupError::unexpected(panic_message(payload.as_ref()))),
    };
    if let Err(err) = &result {
        error!(code = err.code(), error = %err, "critical error during initial setup");
    }
    result
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

/// The static error surface that replaces the whole interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPanel {
    pub title: &'static str,
    pub guidance: &'static str,
    pub code: &'static str,
    pub detail: String,
}

impl FallbackPanel {
    pub fn from_error(err: &StartupError) -> Self {
        Self {
            title: FALLBACK_TITLE,
            guidance: FALLBACK_GUIDANCE,
            code: err.code(),
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for FallbackPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.guidance)?;
        write!(f, "Error: {} [{}]", self.detail, self.code)
    }
}
