//! Shared doubles and builders for game-flow integration tests.
#![allow(dead_code)] // each test binary uses a different subset

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use engine::ai::AiError;
use engine::domain::player_view::{DescribeView, VoteView};
use engine::{
    BotBrain, Dictation, DictationError, Difficulty, GameSetup, Narrator, SessionRecord,
    SessionSink, SetupPlayer,
};
use parking_lot::Mutex;
use tokio::sync::Notify;

#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::test_logging::init();
}

/// Narrator that records every announced line in order.
#[derive(Default)]
pub struct RecordingNarrator {
    pub lines: Mutex<Vec<String>>,
}

impl RecordingNarrator {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

#[async_trait]
impl Narrator for RecordingNarrator {
    async fn speak(&self, text: &str) {
        self.lines.lock().push(text.to_string());
    }
}

/// Brain that replays scripted answers, erroring once the script runs dry.
pub struct ScriptedBrain {
    descriptions: Mutex<VecDeque<String>>,
    votes: Mutex<VecDeque<String>>,
}

impl ScriptedBrain {
    pub fn new(descriptions: &[&str], votes: &[&str]) -> Self {
        Self {
            descriptions: Mutex::new(descriptions.iter().map(|s| s.to_string()).collect()),
            votes: Mutex::new(votes.iter().map(|s| s.to_string()).collect()),
        }
    }
}

#[async_trait]
impl BotBrain for ScriptedBrain {
    async fn suggest_description(&self, _view: &DescribeView) -> Result<String, AiError> {
        self.descriptions
            .lock()
            .pop_front()
            .ok_or_else(|| AiError::Internal("description script exhausted".into()))
    }

    async fn suggest_vote(&self, _view: &VoteView) -> Result<String, AiError> {
        self.votes
            .lock()
            .pop_front()
            .ok_or_else(|| AiError::Internal("vote script exhausted".into()))
    }
}

/// Brain whose collaborator is always down.
pub struct FailingBrain;

#[async_trait]
impl BotBrain for FailingBrain {
    async fn suggest_description(&self, _view: &DescribeView) -> Result<String, AiError> {
        Err(AiError::Internal("suggestion service unreachable".into()))
    }

    async fn suggest_vote(&self, _view: &VoteView) -> Result<String, AiError> {
        Err(AiError::Timeout)
    }
}

/// Brain that blocks its first description call until released, then fails
/// every later call. Models a collaborator response arriving after the game
/// moved on.
pub struct BlockedBrain {
    pub release: Notify,
    calls: AtomicUsize,
    late_answer: String,
}

impl BlockedBrain {
    pub fn new(late_answer: &str) -> Self {
        Self {
            release: Notify::new(),
            calls: AtomicUsize::new(0),
            late_answer: late_answer.to_string(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BotBrain for BlockedBrain {
    async fn suggest_description(&self, _view: &DescribeView) -> Result<String, AiError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.release.notified().await;
            Ok(self.late_answer.clone())
        } else {
            Err(AiError::Internal("collaborator gone".into()))
        }
    }

    async fn suggest_vote(&self, _view: &VoteView) -> Result<String, AiError> {
        Err(AiError::Internal("collaborator gone".into()))
    }
}

/// Sink that keeps every record it is handed.
#[derive(Default)]
pub struct CollectingSink {
    pub records: Mutex<Vec<SessionRecord>>,
}

#[async_trait]
impl SessionSink for CollectingSink {
    async fn log_session(&self, record: SessionRecord) {
        self.records.lock().push(record);
    }
}

/// Dictation double resolving to a fixed outcome.
pub struct StaticDictation(pub Result<String, DictationError>);

#[async_trait]
impl Dictation for StaticDictation {
    async fn dictate(&self) -> Result<String, DictationError> {
        self.0.clone()
    }

    fn stop(&self) {}
}

pub fn setup_from(roster: &[(&str, bool)], impostor_count: usize, seed: u64) -> GameSetup {
    GameSetup {
        players: roster
            .iter()
            .map(|(name, is_bot)| SetupPlayer {
                name: name.to_string(),
                is_bot: *is_bot,
            })
            .collect(),
        impostor_count,
        selected_categories: Vec::new(),
        difficulty: Difficulty::Normal,
        allow_impostor_hint: true,
        seed: Some(seed),
    }
}

pub fn all_bots_setup(seed: u64) -> GameSetup {
    setup_from(
        &[("Nova", true), ("Lumen", true), ("Pixel", true), ("Echo", true)],
        1,
        seed,
    )
}

pub fn humans_setup(seed: u64) -> GameSetup {
    setup_from(&[("Ana", false), ("Bruno", false), ("Carla", false)], 1, seed)
}

pub fn mixed_setup(seed: u64) -> GameSetup {
    setup_from(
        &[("Ana", false), ("Nova", true), ("Bruno", false), ("Lumen", true)],
        1,
        seed,
    )
}

/// Give detached tasks (session logging) a chance to run.
pub async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}

/// Arc-ified collaborator bundle most tests start from.
pub fn recording_collaborators() -> (Arc<RecordingNarrator>, Arc<CollectingSink>) {
    (
        Arc::new(RecordingNarrator::default()),
        Arc::new(CollectingSink::default()),
    )
}
