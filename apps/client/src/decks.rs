//! Card decks: definitions, deterministic shuffling and deck preparation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SubsystemError;
use crate::subsystems::DeckSubsystem;

/// File looked up inside the asset directory.
pub const DECKS_FILE: &str = "decks.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub name: String,
    /// Copies of this card placed in the deck.
    #[serde(default = "one")]
    pub copies: u8,
}

fn one() -> u8 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDefinition {
    pub name: String,
    pub cards: Vec<CardDefinition>,
}

/// Decks shipped with the client.
pub fn builtin_definitions() -> Vec<DeckDefinition> {
    fn deck(name: &str, cards: &[(&str, u8)]) -> DeckDefinition {
        DeckDefinition {
            name: name.to_string(),
            cards: cards
                .iter()
                .map(|(card, copies)| CardDefinition {
                    name: card.to_string(),
                    copies: *copies,
                })
                .collect(),
        }
    }

    vec![
        deck(
            "special-event",
            &[("Election Year", 2), ("Scandal", 2), ("Market Crash", 1), ("Reform", 2)],
        ),
        deck(
            "expansion",
            &[("Land Grab", 3), ("Trade Route", 2), ("Colony", 2)],
        ),
        deck(
            "resistance",
            &[("Strike", 3), ("Protest", 3), ("Boycott", 2)],
        ),
        deck(
            "reckoning",
            &[("Audit", 2), ("Tribunal", 2), ("Exile", 1)],
        ),
        deck(
            "legacy",
            &[("Monument", 2), ("Dynasty", 1), ("Archive", 2)],
        ),
    ]
}

/// SplitMix64 stream used for shuffling; same seed, same order.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z ^= z >> 30;
        z = z.wrapping_mul(0xBF58476D1CE4E5B9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_range(&mut self, max: usize) -> usize {
        let m = max as u64;
        // Rejection sampling keeps the range unbiased.
        let limit = u64::MAX - (u64::MAX % m);
        loop {
            let x = self.next();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }
}

/// Fisher-Yates shuffle driven by [`SplitMix64`].
pub fn shuffle_with_seed<T>(cards: &mut [T], seed: u64) {
    let mut rng = SplitMix64::new(seed);
    for i in (1..cards.len()).rev() {
        let j = rng.next_range(i + 1);
        cards.swap(i, j);
    }
}

/// Expands a definition into its shuffled draw pile.
pub fn build_deck(definition: &DeckDefinition, seed: u64) -> Vec<String> {
    let mut cards: Vec<String> = definition
        .cards
        .iter()
        .flat_map(|card| std::iter::repeat(card.name.clone()).take(card.copies as usize))
        .collect();
    shuffle_with_seed(&mut cards, seed);
    cards
}

/// Default [`DeckSubsystem`].
#[derive(Debug)]
pub struct CardDecks {
    asset_dir: Option<PathBuf>,
    seed: u64,
    decks: Mutex<BTreeMap<String, Vec<String>>>,
}

impl CardDecks {
    /// `seed` fixes the shuffle; `None` draws one from the thread RNG.
    pub fn new(asset_dir: Option<PathBuf>, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random::<u64>());
        Self {
            asset_dir,
            seed,
            decks: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw piles prepared by the last setup, keyed by deck name.
    pub fn decks(&self) -> BTreeMap<String, Vec<String>> {
        self.decks.lock().clone()
    }

    async fn load_definitions(&self) -> Result<Vec<DeckDefinition>, SubsystemError> {
        let Some(dir) = &self.asset_dir else {
            return Ok(builtin_definitions());
        };
        let path = dir.join(DECKS_FILE);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no deck file, using built-in decks");
                Ok(builtin_definitions())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl DeckSubsystem for CardDecks {
    async fn setup_decks(&self) -> Result<bool, SubsystemError> {
        let definitions = self.load_definitions().await?;
        if definitions.is_empty() {
            warn!("no deck definitions");
            return Ok(false);
        }

        let mut decks = BTreeMap::new();
        for (offset, definition) in definitions.iter().enumerate() {
            let cards = build_deck(definition, self.seed.wrapping_add(offset as u64));
            if cards.is_empty() {
                warn!(deck = %definition.name, "deck has no cards");
                return Ok(false);
            }
            decks.insert(definition.name.clone(), cards);
        }

        info!(decks = decks.len(), seed = self.seed, "card decks prepared");
        *self.decks.lock() = decks;
        Ok(true)
    }
}
