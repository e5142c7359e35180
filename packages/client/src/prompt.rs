//! Line input for the interactive clients.

use std::io::BufRead;

use rustyline::{DefaultEditor, error::ReadlineError};

/// Source of user input lines
pub trait Prompt {
    /// Show `prompt` and read one line.
    ///
    /// Returns `None` once input is closed (EOF, Ctrl-C, Ctrl-D).
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Interactive terminal input with line editing and history
pub struct TerminalPrompt {
    editor: DefaultEditor,
}

impl TerminalPrompt {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompt for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Some(line)
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => None,
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                None
            }
        }
    }
}

/// Non-interactive input read line by line from any reader (piped stdin, tests)
///
/// Prompts are not echoed.
pub struct ReaderPrompt<R> {
    reader: R,
}

impl<R: BufRead> ReaderPrompt<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompt for ReaderPrompt<R> {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                None
            }
        }
    }
}
