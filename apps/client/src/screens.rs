//! Registry of the client's screens.
//!
//! Every screen exists for the lifetime of the process; only its visibility
//! attributes change. The registry is the one piece of shared mutable state in
//! the bootstrap and is handed around as [`SharedScreens`].

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::ScreenError;

/// Stacking order given to the screen being shown.
pub const RAISED_Z_INDEX: i32 = 100;

pub const START_SCREEN: &str = "start-screen";
pub const PLAYER_COUNT_SCREEN: &str = "player-count-screen";
pub const ROLE_SELECTION_SCREEN: &str = "role-selection-screen";
pub const GAME_BOARD_SCREEN: &str = "game-board-screen";
pub const END_GAME_SCREEN: &str = "end-game-screen";

/// Screens every client build registers.
pub const DEFAULT_SCREENS: [&str; 5] = [
    START_SCREEN,
    PLAYER_COUNT_SCREEN,
    ROLE_SELECTION_SCREEN,
    GAME_BOARD_SCREEN,
    END_GAME_SCREEN,
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(String);

impl ScreenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub id: ScreenId,
    pub visible: bool,
    /// Mirrors `visible`; kept separately for styling.
    pub active: bool,
    /// 0.0..=1.0
    pub opacity: f32,
    pub z_index: i32,
}

impl Screen {
    fn hidden(id: ScreenId) -> Self {
        Self {
            id,
            visible: false,
            active: false,
            opacity: 0.0,
            z_index: 0,
        }
    }

    fn hide(&mut self) {
        self.visible = false;
        self.active = false;
        self.opacity = 0.0;
    }

    fn reveal(&mut self) {
        self.visible = true;
        self.active = true;
        self.opacity = 1.0;
        self.z_index = RAISED_Z_INDEX;
    }
}

/// Insertion-ordered set of screens keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ScreenRegistry {
    screens: Vec<Screen>,
}

pub type SharedScreens = Arc<Mutex<ScreenRegistry>>;

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_screens() -> Self {
        let mut registry = Self::new();
        for id in DEFAULT_SCREENS {
            registry.register(id);
        }
        registry
    }

    pub fn into_shared(self) -> SharedScreens {
        Arc::new(Mutex::new(self))
    }

    /// Adds a hidden screen. Ids are unique, so re-registering is a no-op.
    pub fn register(&mut self, id: impl Into<ScreenId>) -> bool {
        let id = id.into();
        if self.contains(id.as_str()) {
            return false;
        }
        self.screens.push(Screen::hidden(id));
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<Screen> {
        let index = self.screens.iter().position(|s| s.id.as_str() == id)?;
        Some(self.screens.remove(index))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id.as_str() == id)
    }

    /// Baseline reset: every screen hidden, inactive and transparent.
    pub fn hide_all(&mut self) {
        for screen in &mut self.screens {
            screen.hide();
        }
    }

    /// Makes `id` visible and raises it. Other screens are left untouched.
    pub fn show(&mut self, id: &str) -> Result<(), ScreenError> {
        let screen = self
            .screens
            .iter_mut()
            .find(|s| s.id.as_str() == id)
            .ok_or_else(|| ScreenError::NotFound(ScreenId::new(id)))?;
        screen.reveal();
        Ok(())
    }

    pub fn visible_ids(&self) -> Vec<&ScreenId> {
        self.screens
            .iter()
            .filter(|s| s.visible)
            .map(|s| &s.id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Screen> {
        self.screens.iter()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}
