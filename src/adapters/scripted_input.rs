//! Scripted move input for tests and replays.

use std::collections::VecDeque;

use crate::{Result, error::Error, ports::MoveInput};

/// Returns pre-recorded entries in order and counts how many were read.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    reads: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            lines: lines.into_iter().map(|line| line.to_string()).collect(),
            reads: 0,
        }
    }

    /// Number of entries consumed so far
    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl MoveInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        let line = self.lines.pop_front().ok_or(Error::InputClosed)?;
        self.reads += 1;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_counts_reads() {
        let mut input = ScriptedInput::new([3, 7]);
        assert_eq!(input.read_line("").unwrap(), "3");
        assert_eq!(input.reads(), 1);
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.read_line("").unwrap(), "7");
        assert!(matches!(input.read_line(""), Err(Error::InputClosed)));
        assert_eq!(input.reads(), 2);
    }
}
