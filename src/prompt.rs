//! Terminal prompting for repository and secret input.
//!
//! Visible prompts (repository, secret key) are plain line reads. Secret
//! values are read in crossterm raw mode so they are never echoed to the
//! terminal. Both paths take their input through injectable sources so
//! tests can drive them without a real terminal.

use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::constants;

/// Trait representing a key event source (so tests can inject fake events).
pub trait EventSource {
    fn read_event(&mut self) -> anyhow::Result<Event>;
}

// Real event source that delegates to `crossterm::event::read`
struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn read_event(&mut self) -> anyhow::Result<Event> {
        Ok(event::read()?)
    }
}

/// Prompt for the target repository (visible input, no validation).
pub fn prompt_repo() -> anyhow::Result<String> {
    prompt_line(constants::prompt::REPO)
}

/// Prompt for a secret key (visible input).
///
/// An empty answer is returned as-is; the caller treats it as the end of
/// interactive input.
pub fn prompt_secret_key() -> anyhow::Result<String> {
    prompt_line(constants::prompt::SECRET_KEY)
}

/// Prompt for a secret value with echoing suppressed.
///
/// No confirmation re-prompt: the first answer is taken.
pub fn prompt_secret_value(key: &str) -> anyhow::Result<String> {
    print!("Value for {}: ", key);
    io::stdout().flush()?;

    terminal::enable_raw_mode()?;
    let mut events = CrosstermEventSource;
    let result = read_hidden_with(&mut events);
    terminal::disable_raw_mode()?;
    println!();

    result
}

/// Print a label and read one visible line from stdin.
fn prompt_line(label: &str) -> anyhow::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    read_trimmed_line(&mut io::stdin().lock())
}

/// Read one line from a reader, stripping the trailing newline.
pub fn read_trimmed_line<R: BufRead>(reader: &mut R) -> anyhow::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Accumulate hidden input from an injected event source.
///
/// Characters are appended without echo, Backspace edits, Enter finishes.
/// Ctrl+C exits the process immediately after restoring the terminal.
pub fn read_hidden_with<E: EventSource>(events: &mut E) -> anyhow::Result<String> {
    let mut value = String::new();

    loop {
        if let Event::Key(key) = events.read_event()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
                terminal::disable_raw_mode()?;
                std::process::exit(0);
            }

            match key.code {
                KeyCode::Enter => break,
                KeyCode::Char(c) => {
                    value.push(c);
                }
                KeyCode::Backspace => {
                    value.pop();
                }
                _ => {}
            }
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_trimmed_line_strips_newline() {
        let mut input = Cursor::new(b"owner/repo\n".to_vec());
        assert_eq!(read_trimmed_line(&mut input).unwrap(), "owner/repo");
    }

    #[test]
    fn test_read_trimmed_line_strips_crlf() {
        let mut input = Cursor::new(b"owner/repo\r\n".to_vec());
        assert_eq!(read_trimmed_line(&mut input).unwrap(), "owner/repo");
    }

    #[test]
    fn test_read_trimmed_line_empty_input() {
        let mut input = Cursor::new(Vec::new());
        assert_eq!(read_trimmed_line(&mut input).unwrap(), "");
    }
}
