//! Configuration types for agent creation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::agent::MovePolicy;

/// Configuration for creating a [`crate::agent::CpuAgent`].
///
/// # Examples
///
/// ```
/// use ttt::{AgentConfig, MovePolicy};
///
/// let config = AgentConfig::new()
///     .with_seed(42)
///     .with_policy(MovePolicy::EpsilonGreedy { epsilon: 0.1 })
///     .with_cache_path("agent.json");
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Random seed for reproducible move choices
    pub seed: Option<u64>,
    /// How moves are chosen
    pub policy: MovePolicy,
    /// JSON cache loaded on creation when the file exists
    pub cache_path: Option<PathBuf>,
    /// Display name, defaults to "CPU"
    pub name: Option<String>,
}

impl AgentConfig {
    /// Greedy policy, no seed, no cache file
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_policy(mut self, policy: MovePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_cache_path(mut self, path: impl AsRef<Path>) -> Self {
        self.cache_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
