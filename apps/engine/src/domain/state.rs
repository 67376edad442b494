use crate::config::Difficulty;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Index into the roster (`GameState::players`).
pub type PlayerIndex = usize;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Each human privately views their role/word before play begins.
    /// Skipped entirely when every player is a bot.
    Reveal,
    /// Players give one-word descriptions in turn order, round after round.
    Playing,
    /// Humans first, then bots, each cast exactly one vote.
    Voting,
    /// Votes tallied; outcome decided. Terminal.
    Finished,
    /// An impostor uttered the secret word. Terminal.
    ImpostorWins,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Finished | Phase::ImpostorWins)
    }
}

/// Immutable player identity plus game-assigned attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePlayer {
    pub name: String,
    pub is_bot: bool,
    /// Fixed at game start; exactly `impostor_count` players carry `true`.
    pub is_impostor: bool,
    /// Shared secret, identical across all players.
    pub word: String,
    /// Shared category hint, identical across all players.
    pub hint: String,
    /// false→true exactly once, via the reveal step. Bots start `true`.
    pub has_seen_word: bool,
}

/// Append-only transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub player_name: String,
    pub text: String,
    /// Round during which the description was produced.
    pub round: u32,
}

/// Text recorded when a turn is skipped instead of described.
pub const SKIPPED_TEXT: &str = "(skipped)";

/// Append-only vote entry; at most one per player per game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub voter_name: String,
    pub voted_for_name: String,
    pub is_bot: bool,
}

/// The aggregate root: one authoritative snapshot of a game in progress.
///
/// Created once at game start (after role assignment), mutated only by the
/// orchestrator in response to player actions or collaborator callbacks,
/// replaced wholesale on "new game".
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub players: Vec<GamePlayer>,
    /// Permutation of roster indices, fixed for the game's duration.
    pub turn_order: Vec<PlayerIndex>,
    /// Monotonic cursor into `turn_order` (mod roster size); never reset.
    pub current_turn_position: u64,
    /// Stored round; lags `derived_round()` until the transition is announced.
    pub current_round: u32,
    pub descriptions: Vec<Description>,
    pub votes: Vec<Vote>,
    /// Computed once on entering voting: humans first, then bots.
    pub voting_order: Option<Vec<String>>,
    pub current_voter_index: usize,
    pub word: String,
    pub hint: String,
    pub difficulty: Difficulty,
    pub muted: bool,
    pub allow_impostor_hint: bool,
}

/// Turn cursor math.
///
/// Lives in `domain` so the orchestrator, views, and tests share a single
/// source of truth for rotation and "who acts next".
#[inline]
pub fn current_turn(turn_order: &[PlayerIndex], position: u64) -> PlayerIndex {
    turn_order[(position % turn_order.len() as u64) as usize]
}

/// Round number derived from completed descriptions.
///
/// Rounds are 1-based: with a roster of 4, descriptions 0..=3 belong to
/// round 1, 4..=7 to round 2, and so on.
#[inline]
pub fn derived_round(completed_descriptions: usize, roster_size: usize) -> u32 {
    (completed_descriptions / roster_size) as u32 + 1
}

impl GameState {
    pub fn roster_size(&self) -> usize {
        self.players.len()
    }

    /// Roster index of the player at the current turn position.
    pub fn current_player_index(&self) -> PlayerIndex {
        current_turn(&self.turn_order, self.current_turn_position)
    }

    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.current_player_index()]
    }

    /// Round implied by the transcript; may run ahead of `current_round`
    /// until the round transition is announced.
    pub fn derived_round(&self) -> u32 {
        derived_round(self.descriptions.len(), self.roster_size())
    }

    /// Every player has spoken in the current round, so voting may start.
    pub fn round_complete(&self) -> bool {
        self.descriptions.len() >= self.roster_size() * self.current_round as usize
    }

    pub fn all_seen_word(&self) -> bool {
        self.players.iter().all(|p| p.has_seen_word)
    }

    pub fn all_bots(&self) -> bool {
        self.players.iter().all(|p| p.is_bot)
    }

    pub fn impostors(&self) -> impl Iterator<Item = &GamePlayer> {
        self.players.iter().filter(|p| p.is_impostor)
    }

    pub fn find_player(&self, name: &str) -> Result<(PlayerIndex, &GamePlayer), DomainError> {
        self.players
            .iter()
            .enumerate()
            .find(|(_, p)| p.name == name)
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Player, format!("Unknown player: {name}"))
            })
    }

    /// Name of the player the voting cursor points at, if voting is open.
    pub fn current_voter_name(&self) -> Option<&str> {
        let order = self.voting_order.as_ref()?;
        order.get(self.current_voter_index).map(String::as_str)
    }
}

pub fn require_voting_order<'a>(state: &'a GameState, ctx: &'static str) -> Result<&'a [String], DomainError> {
    state
        .voting_order
        .as_deref()
        .ok_or_else(|| {
            DomainError::validation_other(format!(
                "Invariant violated: voting_order must be set ({ctx})"
            ))
        })
}
