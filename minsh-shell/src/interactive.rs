//! The read-eval loop.

use std::io::{BufRead, Write};

use minsh_core::Interpreter;

use crate::{ShellError, events, tokenizer};

/// Result of a read operation.
pub enum ReadResult {
    /// The user entered a line of input.
    Input(String),
    /// End of input was reached.
    Eof,
}

/// Reads lines from an input source, tokenizes them and hands them to the interpreter until
/// the input is exhausted.
pub struct InteractiveShell<R> {
    interpreter: Interpreter,
    input: R,
    prompt: Option<String>,
}

impl<R: BufRead> InteractiveShell<R> {
    /// Returns a new loop over `input`.
    ///
    /// # Arguments
    ///
    /// * `interpreter` - An interpreter whose startup hook has already run.
    /// * `input` - Where lines are read from.
    /// * `prompt` - Displayed on standard error before each line, if provided.
    pub const fn new(interpreter: Interpreter, input: R, prompt: Option<String>) -> Self {
        Self {
            interpreter,
            input,
            prompt,
        }
    }

    /// Runs until end of input, then shuts the interpreter down and returns its exit code.
    /// Failed commands do not end the loop.
    pub fn run(mut self) -> Result<u8, ShellError> {
        while let ReadResult::Input(line) = self.read_line()? {
            let tokens = tokenizer::tokenize(&line);
            tracing::debug!(target: events::INPUT, "tokens: {tokens:?}");

            if tokens.is_empty() {
                continue;
            }

            let _ = self.interpreter.dispatch(&tokens);
        }

        Ok(self.interpreter.on_shutdown())
    }

    fn read_line(&mut self) -> Result<ReadResult, ShellError> {
        self.display_prompt()?;

        let mut line = String::new();
        loop {
            match self.input.read_line(&mut line) {
                Ok(0) => return Ok(ReadResult::Eof),
                Ok(_) => return Ok(ReadResult::Input(line)),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => (),
                Err(e) => return Err(ShellError::InputError(e)),
            }
        }
    }

    fn display_prompt(&self) -> Result<(), ShellError> {
        if let Some(prompt) = &self.prompt {
            let mut stderr = std::io::stderr();
            write!(stderr, "{prompt}")?;
            stderr.flush()?;
        }

        Ok(())
    }
}
