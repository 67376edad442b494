//! Deterministic fallback brain - difficulty-keyed phrases and random votes.
//!
//! This is the brain of last resort: it must answer synchronously-fast and
//! never fail, so the game can always progress under total collaborator
//! failure. Seedable for reproducible tests.

use std::sync::Mutex;

use async_trait::async_trait;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::trait_def::{AiError, BotBrain};
use crate::config::Difficulty;
use crate::domain::player_view::{DescribeView, VoteView};

/// Generic one-word descriptions per difficulty, vague enough to come from
/// either role.
fn phrase_pool(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => &["Known", "Common", "Popular", "Typical", "Classic"],
        Difficulty::Normal => &["Everyday", "Familiar", "Usual", "Frequent", "Normal"],
        Difficulty::Hard => &["Interesting", "Particular", "Special", "Curious", "Notable"],
        Difficulty::Legend => &["Abstract", "Complex", "Unique", "Rare", "Peculiar"],
    }
}

/// Brain that answers from static pools and uniform-random choices.
pub struct FallbackBrain {
    /// `BotBrain` methods take `&self`; the RNG needs interior mutability.
    rng: Mutex<StdRng>,
}

impl FallbackBrain {
    pub const NAME: &'static str = "fallback";

    /// Create a new `FallbackBrain`.
    ///
    /// * `seed` - `Some` for reproducible behavior (tests), `None` for
    ///   system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// First pool phrase not yet present in `used` (normalized comparison is
    /// the caller's concern; this is a plain containment check over raw
    /// text). Falls back to a positional variant when the pool is exhausted.
    pub fn unused_phrase(&self, difficulty: Difficulty, used: &[String]) -> String {
        let pool = phrase_pool(difficulty);
        pool.iter()
            .find(|phrase| !used.iter().any(|u| u.eq_ignore_ascii_case(phrase)))
            .map(|phrase| (*phrase).to_string())
            .unwrap_or_else(|| format!("Something-{}", used.len() + 1))
    }
}

#[async_trait]
impl BotBrain for FallbackBrain {
    async fn suggest_description(&self, view: &DescribeView) -> Result<String, AiError> {
        let pool = phrase_pool(view.difficulty);

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let choice = pool
            .choose(&mut *rng)
            .ok_or_else(|| AiError::Internal("Empty fallback phrase pool".into()))?;

        Ok((*choice).to_string())
    }

    async fn suggest_vote(&self, view: &VoteView) -> Result<String, AiError> {
        if view.candidates.is_empty() {
            return Err(AiError::InvalidSuggestion(
                "No vote candidates available".into(),
            ));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let choice = view
            .candidates
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| AiError::Internal("Failed to choose random vote".into()))?;

        Ok(choice)
    }
}
