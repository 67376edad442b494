//! Bot decision layer: the brain trait, the remote collaborator client, and
//! the deterministic fallback.

pub mod config;
pub mod fallback;
pub mod protocol;
pub mod registry;
pub mod remote;
pub mod trait_def;

pub use config::BrainConfig;
pub use fallback::FallbackBrain;
pub use registry::{by_name, create_brain, registered_brains, BrainFactory};
pub use remote::RemoteBrain;
pub use trait_def::{AiError, BotBrain};
