//! Parsing of REPL input lines.

use fxdesk_core::conversion::FormChange;

/// Every command word the REPL understands, used for completion and hints.
pub const COMMANDS: &[&str] = &[
    "from", "to", "amount", "clear", "currencies", "history", "show", "dismiss", "help", "quit",
    "exit",
];

/// Arguments accepted by `clear`.
pub const CLEARABLE_FIELDS: &[&str] = &["from", "to", "amount"];

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Edit(FormChange),
    Currencies,
    /// `None` means the configured default.
    History(Option<i64>),
    Show,
    Dismiss,
    Help,
    Quit,
}

/// Parses one trimmed, non-empty input line.
pub fn parse(line: &str) -> Result<ShellCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("Empty command".to_string());
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("Too many arguments for '{}'", word));
    }

    match (word, arg) {
        ("from", Some(code)) => Ok(ShellCommand::Edit(FormChange::From(Some(code.to_uppercase())))),
        ("to", Some(code)) => Ok(ShellCommand::Edit(FormChange::To(Some(code.to_uppercase())))),
        ("amount", Some(raw)) => raw
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .map(|amount| ShellCommand::Edit(FormChange::Amount(Some(amount))))
            .ok_or_else(|| format!("Not a number: {}", raw)),
        ("clear", Some("from")) => Ok(ShellCommand::Edit(FormChange::From(None))),
        ("clear", Some("to")) => Ok(ShellCommand::Edit(FormChange::To(None))),
        ("clear", Some("amount")) => Ok(ShellCommand::Edit(FormChange::Amount(None))),
        ("clear", _) => Err("Usage: clear from|to|amount".to_string()),
        ("from" | "to", None) => Err(format!("Usage: {} <CODE>", word)),
        ("amount", None) => Err("Usage: amount <N>".to_string()),
        ("currencies", None) => Ok(ShellCommand::Currencies),
        ("history", None) => Ok(ShellCommand::History(None)),
        ("history", Some(raw)) => raw
            .parse::<i64>()
            .map(|take| ShellCommand::History(Some(take)))
            .map_err(|_| format!("Not a count: {}", raw)),
        ("show", None) => Ok(ShellCommand::Show),
        ("dismiss", None) => Ok(ShellCommand::Dismiss),
        ("help", None) => Ok(ShellCommand::Help),
        ("quit" | "exit", None) => Ok(ShellCommand::Quit),
        _ => Err(format!("Unknown command: {}", line)),
    }
}
