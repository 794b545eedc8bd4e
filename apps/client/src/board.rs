//! Board resources: the track layout and the images used to draw it.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::error::SubsystemError;
use crate::subsystems::BoardSubsystem;

/// Images the board canvas cannot be drawn without.
pub const REQUIRED_BOARD_IMAGES: [&str; 2] = ["board.png", "tokens.png"];

/// Spaces on the default track, start and finish included.
pub const DEFAULT_TRACK_LENGTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    pub track_length: usize,
    /// Resolved image paths; empty when drawing from built-in shapes.
    pub images: Vec<PathBuf>,
}

/// Default [`BoardSubsystem`].
///
/// Without an asset directory the board falls back to built-in shapes and is
/// always ready. With one, every [`REQUIRED_BOARD_IMAGES`] entry must exist.
#[derive(Debug, Default)]
pub struct BoardAssets {
    asset_dir: Option<PathBuf>,
    layout: Mutex<Option<BoardLayout>>,
}

impl BoardAssets {
    pub fn new(asset_dir: Option<PathBuf>) -> Self {
        Self {
            asset_dir,
            layout: Mutex::new(None),
        }
    }

    /// Layout prepared by the last successful setup.
    pub fn layout(&self) -> Option<BoardLayout> {
        self.layout.lock().clone()
    }

    async fn resolve_images(dir: &Path) -> Result<Option<Vec<PathBuf>>, SubsystemError> {
        let mut images = Vec::with_capacity(REQUIRED_BOARD_IMAGES.len());
        for name in REQUIRED_BOARD_IMAGES {
            let path = dir.join(name);
            match tokio::fs::metadata(&path).await {
                Ok(meta) if meta.is_file() => images.push(path),
                Ok(_) => {
                    warn!(path = %path.display(), "board image is not a file");
                    return Ok(None);
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    warn!(path = %path.display(), "board image missing");
                    return Ok(None);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(Some(images))
    }
}

#[async_trait]
impl BoardSubsystem for BoardAssets {
    async fn setup_board(&self) -> Result<bool, SubsystemError> {
        let images = match &self.asset_dir {
            Some(dir) => match Self::resolve_images(dir).await? {
                Some(images) => images,
                None => return Ok(false),
            },
            None => {
                debug!("no asset directory configured, using built-in board shapes");
                Vec::new()
            }
        };

        let layout = BoardLayout {
            track_length: DEFAULT_TRACK_LENGTH,
            images,
        };
        info!(
            track_length = layout.track_length,
            images = layout.images.len(),
            "board prepared"
        );
        *self.layout.lock() = Some(layout);
        Ok(true)
    }
}
