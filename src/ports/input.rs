//! Input port - where a human player's moves come from

use crate::Result;

/// A blocking, line-oriented source of move entries.
///
/// Implementations show `prompt` (if they have somewhere to show it) and
/// return the next raw line. Validation is the caller's job: the line may
/// be garbage, an occupied cell, or a legal move.
pub trait MoveInput {
    /// Read the next raw entry.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InputClosed`] once the source is exhausted, or
    /// an I/O error if reading fails.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

impl<T: MoveInput + ?Sized> MoveInput for &mut T {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        (**self).read_line(prompt)
    }
}

impl<T: MoveInput + ?Sized> MoveInput for Box<T> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        (**self).read_line(prompt)
    }
}
