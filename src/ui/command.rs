//! Command parsing for the TUI command deck
//!
//! Parses user input in Command mode, supporting:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `:clear` → Clear the answer
//! - `:submit` or `:w` → Submit the answer
//! - `:mv 3 1` → Move the third answer word to the front (1-based)
//! - `+word` / `-word` → Select / deselect a word by label
//! - `@words.txt` → Load a word list file
//! - `@@` → Load words from the clipboard

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Clear,
    Submit,
    /// 0-based answer positions
    Move { from: usize, to: usize },
    Select(String),
    Deselect(String),
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    // Check for empty input first
    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("q" | "quit"), None, _, _) => Command::Quit,
            (Some("h" | "help"), None, _, _) => Command::Help,
            (Some("clear"), None, _, _) => Command::Clear,
            (Some("submit" | "w"), None, _, _) => Command::Submit,
            (Some("mv" | "move"), Some(from), Some(to), None) => {
                match (parse_position(from), parse_position(to)) {
                    (Some(from), Some(to)) => Command::Move { from, to },
                    _ => Command::Unknown(input.to_string()),
                }
            }
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else if let Some(label) = input.strip_prefix('+') {
        label_command(label, Command::Select, input)
    } else if let Some(label) = input.strip_prefix('-') {
        label_command(label, Command::Deselect, input)
    } else {
        Command::Unknown(input.to_string())
    }
}

fn label_command(label: &str, make: fn(String) -> Command, input: &str) -> Command {
    let label = label.trim();
    if label.is_empty() {
        Command::Unknown(input.to_string())
    } else {
        make(label.to_string())
    }
}

/// Parse a line typed into the command deck.
///
/// The `:` that opens the deck counts as the command prefix, so `q` and
/// `mv 2 1` typed there mean `:q` and `:mv 2 1`. Lines starting with `@`,
/// `+`, `-` or an explicit `:` are parsed unchanged.
pub fn parse_deck_line(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() || line.starts_with([':', '@', '+', '-']) {
        parse_command(line)
    } else {
        parse_command(&format!(":{}", line))
    }
}

/// 1-based position typed by the user to a 0-based index
fn parse_position(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok()?.checked_sub(1)
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Clear => AppEvent::ClearAll,
        Command::Submit => AppEvent::Submit,
        Command::Move { from, to } => AppEvent::Reorder { from, to },
        Command::Select(label) => AppEvent::SelectLabel(label),
        Command::Deselect(label) => AppEvent::DeselectLabel(label),
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_clear_and_submit() {
        assert_eq!(parse_command(":clear"), Command::Clear);
        assert_eq!(parse_command(":submit"), Command::Submit);
        assert_eq!(parse_command(" :w "), Command::Submit);
    }

    #[test]
    fn test_parse_move_is_one_based() {
        assert_eq!(parse_command(":mv 3 1"), Command::Move { from: 2, to: 0 });
        assert_eq!(parse_command(":move 1 2"), Command::Move { from: 0, to: 1 });
    }

    #[test]
    fn test_parse_move_rejects_bad_positions() {
        assert!(matches!(parse_command(":mv 0 1"), Command::Unknown(_)));
        assert!(matches!(parse_command(":mv one 2"), Command::Unknown(_)));
        assert!(matches!(parse_command(":mv 1"), Command::Unknown(_)));
        assert!(matches!(parse_command(":mv 1 2 3"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_select_and_deselect() {
        assert_eq!(parse_command("+cat"), Command::Select("cat".to_string()));
        assert_eq!(
            parse_command("+ full moon"),
            Command::Select("full moon".to_string())
        );
        assert_eq!(parse_command("-cat"), Command::Deselect("cat".to_string()));
        assert!(matches!(parse_command("+"), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_command("@  words.txt"),
            Command::LoadFile("words.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
        assert_eq!(parse_command("@"), Command::LoadClipboard);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_command(""), Command::Unknown(_)));
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(matches!(parse_command("invalid"), Command::Unknown(_)));
        assert!(matches!(parse_command(":quit now"), Command::Unknown(_)));
    }

    #[test]
    fn test_deck_line_has_implicit_colon() {
        assert_eq!(parse_deck_line("q"), Command::Quit);
        assert_eq!(parse_deck_line("w"), Command::Submit);
        assert_eq!(parse_deck_line(" clear "), Command::Clear);
        assert_eq!(parse_deck_line("mv 2 1"), Command::Move { from: 1, to: 0 });
        assert_eq!(parse_deck_line(":q"), Command::Quit);
        assert_eq!(parse_deck_line("+cat"), Command::Select("cat".to_string()));
        assert_eq!(parse_deck_line("-cat"), Command::Deselect("cat".to_string()));
        assert_eq!(parse_deck_line("@@"), Command::LoadClipboard);
        assert!(matches!(parse_deck_line(""), Command::Unknown(_)));
        assert!(matches!(parse_deck_line("bogus"), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
        assert_eq!(command_to_app_event(Command::Clear), AppEvent::ClearAll);
        assert_eq!(command_to_app_event(Command::Submit), AppEvent::Submit);
        assert_eq!(
            command_to_app_event(Command::Move { from: 1, to: 0 }),
            AppEvent::Reorder { from: 1, to: 0 }
        );
        assert_eq!(
            command_to_app_event(Command::Select("cat".to_string())),
            AppEvent::SelectLabel("cat".to_string())
        );
        assert_eq!(
            command_to_app_event(Command::LoadFile("w.txt".to_string())),
            AppEvent::LoadFile("w.txt".to_string())
        );
        assert!(matches!(
            command_to_app_event(Command::Unknown("x".to_string())),
            AppEvent::InvalidCommand(_)
        ));
    }
}
