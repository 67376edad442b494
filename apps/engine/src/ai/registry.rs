//! How to register a brain
//!
//! 1) Implement `BotBrain` for your type in its module.
//! 2) Add a `BrainFactory` entry to the static list with a stable `name`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed => same behavior (where applicable).

use std::sync::Arc;

use super::config::BrainConfig;
use super::fallback::FallbackBrain;
use super::remote::RemoteBrain;
use super::trait_def::{AiError, BotBrain};

/// Factory definition for constructing brain implementations.
pub struct BrainFactory {
    pub name: &'static str,
    pub make: fn(&BrainConfig) -> Result<Arc<dyn BotBrain>, AiError>,
}

static BRAIN_FACTORIES: &[BrainFactory] = &[
    BrainFactory {
        name: FallbackBrain::NAME,
        make: make_fallback,
    },
    BrainFactory {
        name: RemoteBrain::NAME,
        make: make_remote,
    },
];

/// Returns the statically registered brain factories.
pub fn registered_brains() -> &'static [BrainFactory] {
    BRAIN_FACTORIES
}

/// Finds a registered brain factory by its name.
pub fn by_name(name: &str) -> Option<&'static BrainFactory> {
    registered_brains()
        .iter()
        .find(|factory| factory.name == name)
}

/// Construct a brain by registry name.
pub fn create_brain(name: &str, config: &BrainConfig) -> Result<Arc<dyn BotBrain>, AiError> {
    let factory = by_name(name)
        .ok_or_else(|| AiError::Internal(format!("brain type '{name}' is not registered")))?;
    (factory.make)(config)
}

fn make_fallback(config: &BrainConfig) -> Result<Arc<dyn BotBrain>, AiError> {
    Ok(Arc::new(FallbackBrain::new(config.seed())))
}

fn make_remote(config: &BrainConfig) -> Result<Arc<dyn BotBrain>, AiError> {
    let endpoint = config.endpoint().ok_or_else(|| {
        AiError::Internal("remote brain requires an 'endpoint' in its config".into())
    })?;
    Ok(Arc::new(RemoteBrain::new(endpoint)?))
}
