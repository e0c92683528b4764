use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::{CLEARABLE_FIELDS, COMMANDS};

/// Supplies the currency codes known at the time of the keystroke.
pub type CodeSource = Arc<dyn Fn() -> Vec<String> + Send + Sync>;

/// rustyline helper for the conversion shell.
///
/// Completes command words, then the argument: currency codes after
/// `from`/`to` (case-insensitive, from the loaded currency list) and field
/// names after `clear`.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    codes: CodeSource,
}

impl CliHelper {
    pub fn new(codes: CodeSource) -> Self {
        Self {
            commands: COMMANDS.iter().map(|cmd| cmd.to_string()).collect(),
            codes,
        }
    }

    fn is_command_word(&self, line: &str) -> bool {
        let word = line.split_whitespace().next().unwrap_or_default();
        self.commands.iter().any(|cmd| cmd == word)
    }

    /// Returns where the word under the cursor starts and the values it may
    /// complete to. Input past the first argument completes to nothing.
    fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        let Some((command, arg)) = line.split_once(' ') else {
            let words = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .cloned()
                .collect();
            return (0, words);
        };
        let arg = arg.trim_start();
        if arg.contains(' ') {
            return (0, vec![]);
        }
        let start = line.len() - arg.len();

        let values: Vec<String> = match command {
            "from" | "to" => {
                let prefix = arg.to_uppercase();
                (self.codes)()
                    .into_iter()
                    .filter(|code| code.starts_with(&prefix))
                    .collect()
            }
            "clear" => CLEARABLE_FIELDS
                .iter()
                .filter(|field| field.starts_with(arg))
                .map(|field| field.to_string())
                .collect(),
            _ => vec![],
        };
        (start, values)
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, values) = self.candidates(&line[..pos]);
        let pairs = values
            .into_iter()
            .map(|value| Pair {
                display: value.clone(),
                replacement: value,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.is_command_word(line) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    /// Hints the rest of the single unambiguous candidate.
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let (start, values) = self.candidates(line);
        let typed = line[start..].len();
        match values.as_slice() {
            [only] if typed > 0 && only.len() > typed => Some(only[typed..].to_string()),
            _ => None,
        }
    }
}

impl Validator for CliHelper {}
