//! Subcommands of the `ttt` binary

pub mod export;
pub mod inspect;
pub mod play;
pub mod selfplay;

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    adapters::repository_for_path,
    agent::CpuAgent,
    cache::StateCache,
    config::AgentConfig,
    ports::StateRepository,
};

/// Load a cache file in the format its extension names
pub(crate) fn load_cache(path: &Path) -> Result<StateCache> {
    repository_for_path(path)
        .load(path)
        .with_context(|| format!("Failed to load state cache: {}", path.display()))
}

/// Build a CPU agent from `config`, reporting the cache it loaded
pub(crate) fn build_cpu_agent(config: &AgentConfig) -> Result<CpuAgent> {
    let agent = CpuAgent::from_config(config).with_context(|| match &config.cache_path {
        Some(path) => format!("Failed to load state cache: {}", path.display()),
        None => "Failed to create CPU agent".to_string(),
    })?;
    if let Some(path) = config.cache_path.as_deref().filter(|path| path.exists()) {
        println!(
            "Loaded {} cached states from {}",
            agent.states().len(),
            path.display()
        );
    }
    Ok(agent)
}

pub(crate) fn save_cpu_agent(agent: &CpuAgent, path: &Path) -> Result<()> {
    agent
        .save_with(repository_for_path(path).as_ref(), path)
        .with_context(|| format!("Failed to save state cache: {}", path.display()))?;
    println!(
        "Saved {} cached states to {}",
        agent.states().len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{agent::MovePolicy, grid::Grid, state::State};

    #[test]
    fn test_build_cpu_agent_follows_config() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("agent.msgpack");

        let missing = AgentConfig::new().with_cache_path(&path).with_seed(7);
        let fresh = build_cpu_agent(&missing).unwrap();
        assert!(fresh.states().is_empty());
        assert_eq!(fresh.rng_seed(), Some(7));

        let mut trained = CpuAgent::new();
        trained.add_state(State::new(Grid::empty(9)));
        save_cpu_agent(&trained, &path).unwrap();

        let config = missing.with_policy(MovePolicy::Random);
        let loaded = build_cpu_agent(&config).unwrap();
        assert_eq!(loaded.states().len(), 1);
        assert_eq!(loaded.policy(), MovePolicy::Random);
    }
}
