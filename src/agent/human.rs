//! Human agent that reads moves from an injected input source

use tracing::debug;

use crate::{
    Result,
    agent::{Agent, BaseAgent},
    error::Error,
    game::format_board,
    grid::Grid,
    ports::MoveInput,
    state::State,
};

/// Agent whose moves come from a [`MoveInput`], re-asking until a legal
/// move is entered.
pub struct HumanAgent<I> {
    base: BaseAgent,
    input: I,
    name: String,
}

impl<I: MoveInput> HumanAgent<I> {
    pub fn new(input: I) -> Self {
        Self {
            base: BaseAgent::new(),
            input,
            name: "Human".to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_input(self) -> I {
        self.input
    }

    /// Read entries until one parses to a legal move, and return it.
    ///
    /// Every rejected entry (not a number, or not an empty cell) costs exactly
    /// one read; there is no retry limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMoveSet`] if no move is legal,
    /// [`Error::NoCurrentState`] before the first update, and whatever the
    /// input source returns when it fails or runs dry.
    pub fn get_next_move(&mut self) -> Result<usize> {
        let legal = self.base.transitions()?.to_vec();
        if legal.is_empty() {
            return Err(Error::EmptyMoveSet);
        }

        let board = self.base.grid().map(format_board).unwrap_or_default();
        let prompt = format!("\n{board}\nYour move {legal:?}: ");
        loop {
            let entry = self.input.read_line(&prompt)?;
            match entry.trim().parse::<usize>() {
                Ok(position) if legal.contains(&position) => return Ok(position),
                _ => debug!(entry = %entry.trim(), "rejected move entry"),
            }
        }
    }
}

impl<I: MoveInput> Agent for HumanAgent<I> {
    fn update_grid(&mut self, grid: Grid) {
        self.base.update_grid(grid);
    }

    fn grid(&self) -> Option<&Grid> {
        self.base.grid()
    }

    fn current_state(&self) -> Option<&State> {
        self.base.current_state()
    }

    fn select_move(&mut self) -> Result<usize> {
        self.get_next_move()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ScriptedInput;

    fn two_move_grid() -> Grid {
        Grid::from_values(&[1, 2, 1, 2, 1, 2, 1, 0, 0]).unwrap()
    }

    #[test]
    fn test_human_agent_initialization() {
        let agent = HumanAgent::new(ScriptedInput::default());
        assert!(agent.grid().is_none());
        assert!(agent.current_state().is_none());
    }

    #[test]
    fn test_human_agent_updates_grid() {
        let mut agent = HumanAgent::new(ScriptedInput::default());
        agent.update_grid(two_move_grid());

        assert_eq!(agent.grid(), Some(&two_move_grid()));
        let state = agent.current_state().unwrap();
        assert_eq!(state.next_states_values(), &[0.0, 0.0]);
        assert_eq!(state.next_states_transitions(), &[7, 8]);
    }

    #[test]
    fn test_accepts_first_legal_entry() {
        let mut agent = HumanAgent::new(ScriptedInput::new([8, 7]));
        agent.update_grid(two_move_grid());
        assert_eq!(agent.get_next_move().unwrap(), 8);
        assert_eq!(agent.input().reads(), 1);
    }

    #[test]
    fn test_loops_until_legal_move() {
        let mut agent = HumanAgent::new(ScriptedInput::new(0..=8));
        agent.update_grid(two_move_grid());

        assert_eq!(agent.get_next_move().unwrap(), 7);
        assert_eq!(agent.input().reads(), 8);
        assert_eq!(agent.input().remaining(), 1);
    }

    #[test]
    fn test_non_numeric_entries_are_retried() {
        let mut agent = HumanAgent::new(ScriptedInput::new(["", "seven", "-1", " 8 "]));
        agent.update_grid(two_move_grid());
        assert_eq!(agent.get_next_move().unwrap(), 8);
        assert_eq!(agent.input().reads(), 4);
    }

    #[test]
    fn test_exhausted_input_is_error() {
        let mut agent = HumanAgent::new(ScriptedInput::new([0, 1]));
        agent.update_grid(two_move_grid());
        assert!(matches!(agent.get_next_move(), Err(Error::InputClosed)));
    }

    #[test]
    fn test_full_board_does_not_read() {
        let mut agent = HumanAgent::new(ScriptedInput::new([0]));
        agent.update_grid(Grid::from_values(&[1, 2, 1, 1, 2, 2, 2, 1, 1]).unwrap());
        assert!(matches!(agent.get_next_move(), Err(Error::EmptyMoveSet)));
        assert_eq!(agent.input().reads(), 0);
    }
}
