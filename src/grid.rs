//! Board representation shared by states, agents and the game loop

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of cells on the standard 3x3 board
pub const BOARD_CELLS: usize = 9;

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// A cell on the board, stored on the wire as 0, 1 or 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::One => 'X',
            Cell::Two => 'O',
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::One),
            2 => Ok(Cell::Two),
            value => Err(Error::InvalidCell { value }),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => 0,
            Cell::One => 1,
            Cell::Two => 2,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to the mark it leaves on the board
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1 (X)"),
            Player::Two => write!(f, "player 2 (O)"),
        }
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// An ordered sequence of cells in row-major order.
///
/// Grids of any length are accepted so that states can be cached for
/// arbitrary boards, but the game-rule helpers ([`Grid::winner`],
/// [`Grid::outcome`]) only apply to the standard 9-cell board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid(Vec<Cell>);

impl Grid {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    /// An empty board with `len` cells
    pub fn empty(len: usize) -> Self {
        Self(vec![Cell::Empty; len])
    }

    /// Build a grid from raw cell values, rejecting anything outside {0, 1, 2}
    pub fn from_values(values: &[u8]) -> Result<Self> {
        values
            .iter()
            .map(|&value| Cell::try_from(value))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn to_values(&self) -> Vec<u8> {
        self.0.iter().map(|&cell| u8::from(cell)).collect()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Indices of empty cells, ascending
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| idx)
    }

    pub fn legal_moves(&self) -> Vec<usize> {
        self.empty_cells().collect()
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Return a new grid with `cell` placed at `position`
    pub fn place(&self, position: usize, cell: Cell) -> Result<Grid> {
        match self.0.get(position) {
            Some(Cell::Empty) if cell != Cell::Empty => {
                let mut cells = self.0.clone();
                cells[position] = cell;
                Ok(Grid(cells))
            }
            _ => Err(Error::InvalidMove { position }),
        }
    }

    /// Winner of a standard 3x3 board, if any line is complete
    pub fn winner(&self) -> Option<Player> {
        if self.0.len() != BOARD_CELLS {
            return None;
        }
        [Player::One, Player::Two].into_iter().find(|player| {
            let target = player.to_cell();
            WINNING_LINES
                .iter()
                .any(|line| line.iter().all(|&idx| self.0[idx] == target))
        })
    }

    /// `Some` once the game on this board is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.winner() {
            Some(GameOutcome::Win(winner))
        } else if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

impl From<Vec<Cell>> for Grid {
    fn from(cells: Vec<Cell>) -> Self {
        Self(cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self.0.iter().map(|cell| cell.to_char()).collect();
        if self.0.len() == BOARD_CELLS {
            write!(f, "{}/{}/{}", &rendered[0..3], &rendered[3..6], &rendered[6..9])
        } else {
            write!(f, "{rendered}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_values_rejects_unknown_cell() {
        let err = Grid::from_values(&[0, 1, 3]).unwrap_err();
        assert!(matches!(err, Error::InvalidCell { value: 3 }));
    }

    #[test]
    fn test_empty_cells_ascending() {
        let grid = Grid::from_values(&[1, 0, 2, 0, 0, 1]).unwrap();
        assert_eq!(grid.legal_moves(), vec![1, 3, 4]);
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let grid = Grid::from_values(&[1, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert!(matches!(
            grid.place(0, Cell::Two),
            Err(Error::InvalidMove { position: 0 })
        ));
        assert!(grid.place(9, Cell::Two).is_err());

        let next = grid.place(4, Cell::Two).unwrap();
        assert_eq!(next.to_values(), vec![1, 0, 0, 0, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_outcome_detection() {
        let win = Grid::from_values(&[1, 1, 1, 2, 2, 0, 0, 0, 0]).unwrap();
        assert_eq!(win.outcome(), Some(GameOutcome::Win(Player::One)));

        let diagonal = Grid::from_values(&[2, 1, 1, 1, 2, 0, 0, 0, 2]).unwrap();
        assert_eq!(diagonal.winner(), Some(Player::Two));

        let draw = Grid::from_values(&[1, 2, 1, 1, 2, 2, 2, 1, 1]).unwrap();
        assert_eq!(draw.outcome(), Some(GameOutcome::Draw));

        let open = Grid::from_values(&[1, 2, 1, 2, 1, 2, 0, 0, 0]).unwrap();
        assert_eq!(open.outcome(), None);
    }

    #[test]
    fn test_serializes_as_integers() {
        let grid = Grid::from_values(&[0, 1, 2]).unwrap();
        assert_eq!(serde_json::to_string(&grid).unwrap(), "[0,1,2]");

        let parsed: Grid = serde_json::from_str("[2,0,1]").unwrap();
        assert_eq!(parsed.to_values(), vec![2, 0, 1]);
        assert!(serde_json::from_str::<Grid>("[0,7]").is_err());
    }

    #[test]
    fn test_display_rows() {
        let grid = Grid::from_values(&[1, 2, 0, 0, 1, 0, 0, 0, 2]).unwrap();
        assert_eq!(grid.to_string(), "XO./.X./..O");
    }
}
