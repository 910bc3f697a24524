//! Computer agent backed by a cache of per-state move values

use std::{fmt, path::Path, str::FromStr};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    adapters::{JsonRepository, repository_for_path},
    agent::{Agent, BaseAgent},
    cache::{SerializedAgent, StateCache},
    config::AgentConfig,
    error::Error,
    grid::Grid,
    ports::StateRepository,
    state::State,
};

/// How [`CpuAgent::select_move`] chooses among legal moves
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovePolicy {
    /// Uniformly random legal move
    Random,
    /// Highest cached value, ties broken at random
    #[default]
    Greedy,
    /// Random with probability `epsilon`, greedy otherwise
    EpsilonGreedy { epsilon: f64 },
}

impl FromStr for MovePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        let parse_error = || Error::ParseMovePolicy {
            input: s.to_string(),
            expected: "random, greedy, epsilon:<0..1>".to_string(),
        };
        match lower.as_str() {
            "random" => Ok(MovePolicy::Random),
            "greedy" => Ok(MovePolicy::Greedy),
            other => {
                let epsilon: f64 = other
                    .strip_prefix("epsilon:")
                    .and_then(|value| value.parse().ok())
                    .ok_or_else(parse_error)?;
                if (0.0..=1.0).contains(&epsilon) {
                    Ok(MovePolicy::EpsilonGreedy { epsilon })
                } else {
                    Err(parse_error())
                }
            }
        }
    }
}

impl fmt::Display for MovePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovePolicy::Random => write!(f, "random"),
            MovePolicy::Greedy => write!(f, "greedy"),
            MovePolicy::EpsilonGreedy { epsilon } => write!(f, "epsilon:{epsilon}"),
        }
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Agent that remembers every board it has been shown.
///
/// States live in a [`StateCache`] keyed by insertion order. When a board is
/// seen again its cached values are reused, so values written with
/// [`CpuAgent::update_state`] survive across games and through
/// [`CpuAgent::save`]/[`CpuAgent::load`].
///
/// [`Agent::update_grid`] therefore grows the cache by one entry only for a
/// board it has not cached yet; a known board adds nothing.
#[derive(Debug, Clone)]
pub struct CpuAgent {
    base: BaseAgent,
    states: StateCache,
    policy: MovePolicy,
    rng: StdRng,
    rng_seed: Option<u64>,
    name: String,
}

impl Default for CpuAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuAgent {
    pub fn new() -> Self {
        Self {
            base: BaseAgent::new(),
            states: StateCache::new(),
            policy: MovePolicy::default(),
            rng: build_rng(None),
            rng_seed: None,
            name: "CPU".to_string(),
        }
    }

    /// Build an agent from configuration, loading its cache if the
    /// configured file already exists.
    ///
    /// The cache format follows the file extension (see
    /// [`repository_for_path`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the cache file exists but cannot be read.
    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        let mut agent = Self::new().with_policy(config.policy);
        if let Some(seed) = config.seed {
            agent.set_rng_seed(seed);
        }
        if let Some(name) = &config.name {
            agent.name = name.clone();
        }
        if let Some(path) = config.cache_path.as_deref().filter(|path| path.exists()) {
            agent.load_with(repository_for_path(path).as_ref(), path)?;
        }
        Ok(agent)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.set_rng_seed(seed);
        self
    }

    pub fn with_policy(mut self, policy: MovePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Reseed the move-selection RNG for reproducible choices
    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
    }

    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    pub fn policy(&self) -> MovePolicy {
        self.policy
    }

    pub fn states(&self) -> &StateCache {
        &self.states
    }

    /// Replace the whole cache
    pub fn set_states(&mut self, states: StateCache) {
        self.states = states;
    }

    /// Mutable access to the current state, e.g. to overwrite its values
    pub fn current_state_mut(&mut self) -> Option<&mut State> {
        self.base.current_state_mut()
    }

    /// Uniformly random legal move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMoveSet`] if the current board has no empty cell.
    pub fn get_random_move(&mut self) -> Result<usize> {
        self.base
            .transitions()?
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::EmptyMoveSet)
    }

    /// Legal move with the highest value; equal values are broken at random.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMoveSet`] if the current board has no empty cell.
    pub fn get_best_move(&mut self) -> Result<usize> {
        let state = self
            .base
            .current_state()
            .ok_or(Error::NoCurrentState)?;
        if state.next_states_transitions().is_empty() {
            return Err(Error::EmptyMoveSet);
        }

        let best = state
            .move_values()
            .map(|(_, value)| value)
            .fold(f64::NEG_INFINITY, f64::max);
        let candidates: Vec<usize> = state
            .move_values()
            .filter(|&(_, value)| value == best)
            .map(|(position, _)| position)
            .collect();

        // All-NaN values leave no candidate; fall back to any legal move.
        let pool: &[usize] = if candidates.is_empty() {
            state.next_states_transitions()
        } else {
            &candidates
        };
        pool.choose(&mut self.rng).copied().ok_or(Error::EmptyMoveSet)
    }

    pub fn has_state(&self, candidate: &State) -> bool {
        self.states.has_state(candidate)
    }

    /// Insert without a duplicate check; returns the sequence number used
    pub fn add_state(&mut self, state: State) -> u64 {
        self.states.add_state(state)
    }

    /// # Errors
    ///
    /// Returns [`Error::StateNotFound`] if no cached state has this grid.
    pub fn get_state(&self, grid: &Grid) -> Result<&State> {
        self.states.get_state(grid)
    }

    /// Replace the cached state whose grid matches `new_state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StateNotFound`] and changes nothing if the grid is not
    /// cached.
    pub fn update_state(&mut self, new_state: State) -> Result<u64> {
        self.states.update_state(new_state)
    }

    pub fn serialize(&self) -> SerializedAgent {
        self.states.serialize()
    }

    /// Replace the cache with the deserialized contents of `data`
    pub fn deserialize(&mut self, data: SerializedAgent) {
        self.states = StateCache::deserialize(data);
    }

    /// Write the cache as JSON, creating or overwriting `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with(&JsonRepository::new(), path)
    }

    /// Replace the cache with the JSON document at `path`
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.load_with(&JsonRepository::new(), path)
    }

    pub fn save_with<R: StateRepository + ?Sized>(
        &self,
        repository: &R,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        repository.save(&self.states, path.as_ref())
    }

    pub fn load_with<R: StateRepository + ?Sized>(
        &mut self,
        repository: &R,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        self.states = repository.load(path.as_ref())?;
        Ok(())
    }
}

impl Agent for CpuAgent {
    /// Derive the state for `grid`, preferring the cached copy.
    ///
    /// An unseen board is appended to the cache under the next sequence
    /// number; a known board reuses the cached values and transitions.
    fn update_grid(&mut self, grid: Grid) {
        let cached = self.states.get_state(&grid).ok().cloned();
        self.base.update_grid(grid);

        match cached {
            Some(state) => self.base.set_current_state(state),
            None => {
                if let Some(fresh) = self.base.current_state() {
                    let seq = self.states.add_state(fresh.clone());
                    debug!(agent = %self.name, seq, "new state seen");
                }
            }
        }
    }

    fn grid(&self) -> Option<&Grid> {
        self.base.grid()
    }

    fn current_state(&self) -> Option<&State> {
        self.base.current_state()
    }

    fn select_move(&mut self) -> Result<usize> {
        match self.policy {
            MovePolicy::Random => self.get_random_move(),
            MovePolicy::Greedy => self.get_best_move(),
            MovePolicy::EpsilonGreedy { epsilon } => {
                if self.rng.random::<f64>() < epsilon {
                    self.get_random_move()
                } else {
                    self.get_best_move()
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
