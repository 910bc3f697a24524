//! Cached board state with per-move value estimates

use crate::{
    error::{Error, Result},
    grid::Grid,
};

/// One board configuration plus a value estimate for every legal move.
///
/// `next_states_transitions[i]` is the empty cell index whose resulting
/// position is valued at `next_states_values[i]`. Identity for cache lookups
/// is the grid alone; see [`State::matches`].
#[derive(Debug, Clone)]
pub struct State {
    grid: Grid,
    next_states_values: Vec<f64>,
    next_states_transitions: Vec<usize>,
}

impl State {
    /// Derive a state from a raw grid with every move valued at 0.0
    pub fn new(grid: Grid) -> Self {
        let next_states_transitions = grid.legal_moves();
        let next_states_values = vec![0.0; next_states_transitions.len()];
        Self {
            grid,
            next_states_values,
            next_states_transitions,
        }
    }

    /// Rebuild a state from stored arrays, taken verbatim.
    ///
    /// Nothing is recomputed from `grid`: persisted values carry prior learning.
    pub fn from_parts(
        grid: Grid,
        next_states_values: Vec<f64>,
        next_states_transitions: Vec<usize>,
    ) -> Self {
        Self {
            grid,
            next_states_values,
            next_states_transitions,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn next_states_values(&self) -> &[f64] {
        &self.next_states_values
    }

    pub fn next_states_transitions(&self) -> &[usize] {
        &self.next_states_transitions
    }

    /// Replace the value estimates wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueLengthMismatch`] if `values` does not have one
    /// entry per transition.
    pub fn set_next_states_values(&mut self, values: Vec<f64>) -> Result<()> {
        if values.len() != self.next_states_transitions.len() {
            return Err(Error::ValueLengthMismatch {
                expected: self.next_states_transitions.len(),
                got: values.len(),
            });
        }
        self.next_states_values = values;
        Ok(())
    }

    /// Whether this state describes exactly `grid`
    pub fn matches(&self, grid: &Grid) -> bool {
        self.grid == *grid
    }

    /// Value estimate paired with each legal move
    pub fn move_values(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.next_states_transitions
            .iter()
            .copied()
            .zip(self.next_states_values.iter().copied())
    }

    pub fn into_parts(self) -> (Grid, Vec<f64>, Vec<usize>) {
        (
            self.grid,
            self.next_states_values,
            self.next_states_transitions,
        )
    }
}
