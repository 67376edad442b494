//! Setup→play handoff configuration.
//!
//! The setup stage produces one [`GameSetup`] value, serialized once when the
//! game starts and deserialized once when the engine initializes. The engine
//! holds it by value for the whole session; "new game" re-rolls everything
//! transient while this configuration (roster included) is preserved.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Difficulty ladder shared by the word bank, the suggestion collaborator and
/// the deterministic fallback pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Legend,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Legend => "legend",
        }
    }
}

/// One roster entry. Identity is immutable for the game's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupPlayer {
    pub name: String,
    pub is_bot: bool,
}

/// The single handoff object between setup and play.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSetup {
    pub players: Vec<SetupPlayer>,
    pub impostor_count: usize,
    #[serde(default)]
    pub selected_categories: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_true")]
    pub allow_impostor_hint: bool,
    /// Optional base RNG seed for deterministic games (tests, replays).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_true() -> bool {
    true
}

/// The engine refuses to start with fewer players than this.
pub const MIN_PLAYERS: usize = 3;

impl GameSetup {
    /// Validate the configuration handed in from setup.
    ///
    /// This is the only unrecoverable failure surface in the engine: a bad
    /// roster or impostor count cannot be played around.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!(
                    "At least {MIN_PLAYERS} players required, got {}",
                    self.players.len()
                ),
            ));
        }

        if self.impostor_count < 1 || self.impostor_count > self.players.len() - 1 {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfig,
                format!(
                    "Impostor count must be in 1..={}, got {}",
                    self.players.len() - 1,
                    self.impostor_count
                ),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for player in &self.players {
            if player.name.trim().is_empty() {
                return Err(DomainError::validation(
                    ValidationKind::InvalidConfig,
                    "Player names must be non-empty",
                ));
            }
            if !seen.insert(player.name.as_str()) {
                return Err(DomainError::validation(
                    ValidationKind::InvalidConfig,
                    format!("Duplicate player name: {}", player.name),
                ));
            }
        }

        Ok(())
    }

    /// Serialize for the setup→play handoff (written once at game start).
    pub fn to_handoff_json(&self) -> Result<String, DomainError> {
        serde_json::to_string(self).map_err(|e| {
            DomainError::validation(
                ValidationKind::InvalidConfig,
                format!("Setup serialization failed: {e}"),
            )
        })
    }

    /// Deserialize the handoff (read once at engine initialization) and
    /// validate it in the same step.
    pub fn from_handoff_json(raw: &str) -> Result<Self, DomainError> {
        let setup: GameSetup = serde_json::from_str(raw).map_err(|e| {
            DomainError::validation(
                ValidationKind::InvalidConfig,
                format!("Setup deserialization failed: {e}"),
            )
        })?;
        setup.validate()?;
        Ok(setup)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn bot_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_bot).count()
    }

    pub fn all_bots(&self) -> bool {
        self.players.iter().all(|p| p.is_bot)
    }
}
