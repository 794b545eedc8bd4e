//! Manual input controls the bootstrap attaches handlers to.

use parking_lot::Mutex;
use tracing::debug;

pub type ClickHandler = Box<dyn FnMut() + Send>;

/// The "start" button on the start screen.
///
/// Holds at most one handler. Installing a handler drops whatever was there
/// before, so running setup several times never stacks listeners.
#[derive(Default)]
pub struct StartControl {
    handler: Mutex<Option<ClickHandler>>,
}

impl StartControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `handler`, returning whether an earlier one was replaced.
    pub fn replace_handler<F>(&self, handler: F) -> bool
    where
        F: FnMut() + Send + 'static,
    {
        let replaced = self.handler.lock().replace(Box::new(handler)).is_some();
        debug!(replaced, "start control handler attached");
        replaced
    }

    pub fn has_handler(&self) -> bool {
        self.handler.lock().is_some()
    }

    /// Runs the attached handler. Returns false when nothing is attached.
    pub fn click(&self) -> bool {
        // The handler is taken out while it runs so it may itself touch the control.
        let taken = self.handler.lock().take();
        let Some(mut handler) = taken else {
            debug!("start control clicked with no handler attached");
            return false;
        };
        handler();

        let mut slot = self.handler.lock();
        if slot.is_none() {
            *slot = Some(handler);
        }
        true
    }
}

impl std::fmt::Debug for StartControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StartControl")
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
