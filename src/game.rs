//! Turn loop driving two agents on the standard board

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Result,
    agent::Agent,
    grid::{BOARD_CELLS, Cell, GameOutcome, Grid, Player},
};

/// Render a 3x3 board with the index of every empty cell, e.g.
///
/// ```text
///  X | 1 | 2
/// ---+---+---
///  3 | O | 5
/// ---+---+---
///  6 | 7 | 8
/// ```
///
/// Boards of any other size fall back to their one-line form.
pub fn format_board(grid: &Grid) -> String {
    if grid.len() != BOARD_CELLS {
        return grid.to_string();
    }
    let symbols: Vec<String> = grid
        .cells()
        .iter()
        .enumerate()
        .map(|(idx, cell)| match cell {
            Cell::Empty => idx.to_string(),
            other => other.to_char().to_string(),
        })
        .collect();
    symbols
        .chunks(3)
        .map(|row| format!(" {} | {} | {}", row[0], row[1], row[2]))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Summary of a finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub first_player: Player,
    pub moves: Vec<usize>,
    pub final_grid: Grid,
    pub outcome: GameOutcome,
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    first_player: Player,
    to_move: Player,
    moves: Vec<usize>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Empty board with player one to move
    pub fn new() -> Self {
        Self::with_first_player(Player::One)
    }

    pub fn with_first_player(first_player: Player) -> Self {
        Self {
            grid: Grid::empty(BOARD_CELLS),
            first_player,
            to_move: first_player,
            moves: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.grid.outcome()
    }

    /// Place the mover's mark at `position` and pass the turn.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has an outcome and
    /// [`crate::Error::InvalidMove`] for an occupied or off-board cell.
    pub fn play(&mut self, position: usize) -> Result<()> {
        if self.outcome().is_some() {
            return Err(crate::Error::GameOver);
        }
        self.grid = self.grid.place(position, self.to_move.to_cell())?;
        self.moves.push(position);
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Alternate between the two agents until the game is decided.
    ///
    /// `player_one` places 1s and `player_two` places 2s. Each agent is shown
    /// the board through [`Agent::update_grid`] before it is asked to move.
    ///
    /// # Errors
    ///
    /// Propagates move-selection errors and rejects illegal moves with
    /// [`crate::Error::InvalidMove`].
    pub fn run(
        mut self,
        player_one: &mut dyn Agent,
        player_two: &mut dyn Agent,
    ) -> Result<GameRecord> {
        let outcome = loop {
            if let Some(outcome) = self.outcome() {
                break outcome;
            }
            let agent: &mut dyn Agent = match self.to_move {
                Player::One => &mut *player_one,
                Player::Two => &mut *player_two,
            };
            agent.update_grid(self.grid.clone());
            let position = agent.select_move()?;
            debug!(agent = agent.name(), position, "move selected");
            self.play(position)?;
        };

        info!(?outcome, moves = self.moves.len(), "game finished");
        Ok(GameRecord {
            first_player: self.first_player,
            moves: self.moves,
            final_grid: self.grid,
            outcome,
        })
    }
}
