//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use ttt::{Grid, State, StateCache};

/// Parse raw cell values into a grid, panicking on bad input
pub fn grid(values: &[u8]) -> Grid {
    Grid::from_values(values).expect("test grid must only contain 0, 1 or 2")
}

/// Nine-cell board with only cells 7 and 8 free
pub fn two_move_grid() -> Grid {
    grid(&[1, 2, 1, 2, 1, 2, 1, 0, 0])
}

/// Ten-cell fixtures: an empty board and one with only the last cell free
pub fn ten_cell_cache() -> StateCache {
    let mut cache = StateCache::new();
    cache.add_state(State::new(Grid::empty(10)));
    cache.add_state(State::new(grid(&[1, 1, 1, 1, 1, 1, 1, 1, 1, 0])));
    cache
}
