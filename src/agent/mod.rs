//! Decision-making agents
//!
//! Every agent tracks the current board and the [`State`] derived from it.
//! [`CpuAgent`] adds a persisted state cache and random/greedy move
//! selection; [`HumanAgent`] asks an injected [`crate::ports::MoveInput`]
//! until a legal move is entered.

pub mod cpu;
pub mod human;

pub use cpu::{CpuAgent, MovePolicy};
pub use human::HumanAgent;

use crate::{Result, grid::Grid, state::State};

/// Interface shared by every agent the game loop can drive
pub trait Agent {
    /// Replace the current board and re-derive the current state.
    fn update_grid(&mut self, grid: Grid);

    /// Current board, `None` before the first [`Agent::update_grid`].
    fn grid(&self) -> Option<&Grid>;

    /// State derived from the current board.
    fn current_state(&self) -> Option<&State>;

    /// Pick a move for the current board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyMoveSet`] if the board has no empty cell
    /// and [`crate::Error::NoCurrentState`] before the first update.
    fn select_move(&mut self) -> Result<usize>;

    /// Display name used in logs and CLI output.
    fn name(&self) -> &str;
}

/// Board tracking shared by all agents
#[derive(Debug, Clone, Default)]
pub struct BaseAgent {
    grid: Option<Grid>,
    current_state: Option<State>,
}

impl BaseAgent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `grid` and derive a fresh state from it, discarding the old one
    pub fn update_grid(&mut self, grid: Grid) {
        self.current_state = Some(State::new(grid.clone()));
        self.grid = Some(grid);
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn current_state(&self) -> Option<&State> {
        self.current_state.as_ref()
    }

    pub fn current_state_mut(&mut self) -> Option<&mut State> {
        self.current_state.as_mut()
    }

    pub(crate) fn set_current_state(&mut self, state: State) {
        self.current_state = Some(state);
    }

    /// Legal moves of the current state, or an error before the first update
    pub(crate) fn transitions(&self) -> Result<&[usize]> {
        self.current_state
            .as_ref()
            .map(State::next_states_transitions)
            .ok_or(crate::Error::NoCurrentState)
    }
}
