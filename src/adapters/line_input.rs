//! Line-oriented move input over any reader/writer pair (stdin in the CLI).

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{Result, error::Error, ports::MoveInput};

/// Prompts on `writer` and reads one line per call from `reader`.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
}

impl LineInput<StdinLock<'static>, Stdout> {
    /// Interactive input on the process's stdin/stdout
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> MoveInput for LineInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")
            .and_then(|_| self.writer.flush())
            .map_err(|source| Error::Io {
                operation: "write move prompt".to_string(),
                source,
            })?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read move input".to_string(),
                source,
            })?;
        if read == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
