use std::sync::Arc;

use async_trait::async_trait;
use engine::ai::create_brain;
use engine::domain::voting::tally;
use engine::{
    BrainConfig, Difficulty, GameFlowService, GameSetup, Narrator, SetupPlayer, TracingSessionSink,
};

mod telemetry;

/// Bin-local narrator: prints announcements instead of speaking them.
struct ConsoleNarrator;

#[async_trait]
impl Narrator for ConsoleNarrator {
    async fn speak(&self, text: &str) {
        println!("🔊 {text}");
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - ENGINE_BRAIN: "fallback" (default) or "remote"
    // - ENGINE_SUGGEST_ENDPOINT: suggestion service URL (remote brain only)
    // - ENGINE_ROUNDS: rounds to play before voting (default 2)
    // - ENGINE_SEED: base RNG seed for a reproducible game
    let brain_name = std::env::var("ENGINE_BRAIN").unwrap_or_else(|_| "fallback".to_string());
    let rounds = std::env::var("ENGINE_ROUNDS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(2);
    let seed = std::env::var("ENGINE_SEED")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    let setup = GameSetup {
        players: ["Nova", "Lumen", "Pixel", "Echo"]
            .iter()
            .map(|name| SetupPlayer {
                name: name.to_string(),
                is_bot: true,
            })
            .collect(),
        impostor_count: 1,
        selected_categories: Vec::new(),
        difficulty: Difficulty::Normal,
        allow_impostor_hint: true,
        seed,
    };

    let mut config = match std::env::var("ENGINE_SUGGEST_ENDPOINT") {
        Ok(endpoint) => BrainConfig::with_endpoint(endpoint),
        Err(_) => BrainConfig::empty(),
    };
    config.seed = seed;

    let brain = match create_brain(&brain_name, &config) {
        Ok(brain) => brain,
        Err(e) => {
            eprintln!("❌ Failed to build brain '{brain_name}': {e}");
            std::process::exit(1);
        }
    };

    let flow = match GameFlowService::new(
        setup,
        Arc::new(ConsoleNarrator),
        brain,
        Arc::new(TracingSessionSink),
    ) {
        Ok(flow) => flow,
        Err(e) => {
            eprintln!("❌ Failed to start game: {e}");
            std::process::exit(1);
        }
    };

    println!("🚀 Spectator game: 4 bots, {rounds} round(s), brain '{brain_name}'");
    {
        let state = flow.snapshot();
        let impostors: Vec<_> = state.impostors().map(|p| p.name.clone()).collect();
        println!(
            "   Secret word: {} (hint: {}) — impostor(s): {}",
            state.word,
            state.hint,
            impostors.join(", ")
        );
    }

    // Each drive plays one full round for an all-bot roster, pausing at the
    // round boundary.
    for _ in 0..rounds {
        if let Err(e) = flow.process_game_state().await {
            eprintln!("❌ Game processing failed: {e}");
            std::process::exit(1);
        }
        if flow.snapshot().phase.is_terminal() {
            break;
        }
    }

    if !flow.snapshot().phase.is_terminal() {
        if let Err(e) = flow.start_voting().await {
            eprintln!("❌ Voting failed: {e}");
            std::process::exit(1);
        }
    }

    let state = flow.snapshot();
    println!("✅ Game over in phase {:?} after round {}", state.phase, state.current_round);
    for (name, count) in tally(&state.votes) {
        println!("   {name}: {count} vote(s)");
    }

    Ok(())
}
