//! Game flow orchestration service - drives the phase state machine over the
//! pure domain, synchronized with the narration and suggestion collaborators.
//!
//! One authoritative in-memory state, mutated only in response to discrete
//! events. A single-flight guard keeps bot processing non-reentrant and a
//! generation counter marks in-flight async work stale across resets.

mod announcements;
mod orchestration;
mod player_actions;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::ai::{BotBrain, FallbackBrain};
use crate::config::GameSetup;
use crate::domain::roles::new_game_state;
use crate::domain::seed_derivation::{
    derive_fallback_seed, derive_order_seed, derive_role_seed, derive_word_seed,
};
use crate::domain::transition::{derive_events, GameEvent, LifecycleView};
use crate::domain::words::draw_word;
use crate::domain::GameState;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::narration::{Announcer, Narrator};
use crate::services::session_log::SessionSink;

pub use announcements::{narration_line, result_line};

pub struct GameFlowService {
    setup: GameSetup,
    base_seed: u64,
    /// Increments on every reset so each game draws from fresh RNG streams.
    game_no: AtomicU64,
    game_id: Mutex<Uuid>,
    started_at: Mutex<OffsetDateTime>,

    state: Mutex<GameState>,
    announcer: Announcer,
    brain: Arc<dyn BotBrain>,
    fallback: FallbackBrain,
    sink: Arc<dyn SessionSink>,

    /// Stale-guard for async work: results captured under an older
    /// generation are discarded instead of applied.
    generation: AtomicU64,
    /// Single-flight guard around the processing loop.
    processing: AtomicBool,
    /// One-shot guard for the finished-phase result announcement.
    result_announced: AtomicBool,
    /// Turn position whose announcement already played.
    announced_turn: Mutex<Option<u64>>,
}

impl GameFlowService {
    /// Build the engine from a validated setup and its collaborators.
    ///
    /// Performs the initial word draw, role assignment, and turn-order
    /// shuffle. Call [`process_game_state`](Self::process_game_state)
    /// afterwards to start announcements (and, for all-bot rosters, the
    /// whole game).
    pub fn new(
        setup: GameSetup,
        narrator: Arc<dyn Narrator>,
        brain: Arc<dyn BotBrain>,
        sink: Arc<dyn SessionSink>,
    ) -> Result<Self, AppError> {
        setup.validate()?;

        let base_seed = setup.seed.unwrap_or_else(|| rand::rng().random());
        let state = roll_state(&setup, base_seed, 0)?;
        let fallback = FallbackBrain::new(Some(derive_fallback_seed(base_seed, 0)));

        Ok(Self {
            setup,
            base_seed,
            game_no: AtomicU64::new(0),
            game_id: Mutex::new(Uuid::new_v4()),
            started_at: Mutex::new(OffsetDateTime::now_utc()),
            state: Mutex::new(state),
            announcer: Announcer::new(narrator),
            brain,
            fallback,
            sink,
            generation: AtomicU64::new(0),
            processing: AtomicBool::new(false),
            result_announced: AtomicBool::new(false),
            announced_turn: Mutex::new(None),
        })
    }

    /// Clone of the authoritative state, for views and assertions.
    pub fn snapshot(&self) -> GameState {
        self.state.lock().clone()
    }

    /// The generation async work should capture before its first await.
    pub(super) fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub(super) fn is_stale(&self, generation: u64) -> bool {
        self.current_generation() != generation
    }

    /// Run `mutate` against the locked state and derive the lifecycle
    /// events the mutation produced. The lock is released before the caller
    /// announces anything.
    pub(super) fn apply<T>(
        &self,
        mutate: impl FnOnce(&mut GameState) -> Result<T, DomainError>,
    ) -> Result<(T, Vec<GameEvent>), DomainError> {
        let mut state = self.state.lock();
        let before = LifecycleView::of(&state);
        let out = mutate(&mut state)?;
        let after = LifecycleView::of(&state);
        Ok((out, derive_events(&before, &after)))
    }

    /// Announce with the current mute flag; resolves when narration ends,
    /// is cancelled, or hits the cap.
    pub(super) async fn announce(&self, text: &str) {
        let muted = self.state.lock().muted;
        self.announcer.announce(text, muted).await;
    }

    pub(super) async fn announce_events(&self, events: &[GameEvent]) {
        for event in events {
            self.announce(&narration_line(event)).await;
        }
    }
}

fn roll_state(setup: &GameSetup, base_seed: u64, game_no: u64) -> Result<GameState, DomainError> {
    let mut word_rng = ChaCha12Rng::seed_from_u64(derive_word_seed(base_seed, game_no));
    let pair = draw_word(&mut word_rng, &setup.selected_categories, setup.difficulty)?;

    let mut role_rng = ChaCha12Rng::seed_from_u64(derive_role_seed(base_seed, game_no));
    let mut order_rng = ChaCha12Rng::seed_from_u64(derive_order_seed(base_seed, game_no));
    new_game_state(setup, pair, &mut role_rng, &mut order_rng)
}

impl GameFlowService {
    /// Discard all transient state and start a fresh game: new word, new
    /// roles, new turn order, same roster and configuration.
    ///
    /// Outstanding narration is cancelled and the generation bump makes any
    /// in-flight bot work stale, so late collaborator responses cannot touch
    /// the new game.
    pub fn reset(&self) -> Result<(), AppError> {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.announcer.cancel_all();

        let game_no = self.game_no.fetch_add(1, Ordering::AcqRel) + 1;
        let fresh = roll_state(&self.setup, self.base_seed, game_no)?;

        *self.state.lock() = fresh;
        *self.game_id.lock() = Uuid::new_v4();
        *self.started_at.lock() = OffsetDateTime::now_utc();
        *self.announced_turn.lock() = None;
        self.result_announced.store(false, Ordering::Release);
        Ok(())
    }

    /// Leaving the game view: abort narration and mark in-flight bot work
    /// stale without rolling a new game.
    pub fn leave(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.announcer.cancel_all();
    }

    /// Mute or unmute narration. Muting aborts the announcement in flight.
    pub fn set_muted(&self, muted: bool) {
        let was_muted = {
            let mut state = self.state.lock();
            let was = state.muted;
            state.muted = muted;
            was
        };
        if muted && !was_muted {
            self.announcer.cancel_all();
        }
    }
}
