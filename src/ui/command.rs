//! Command parsing for the TUI command deck.
//!
//! Supports:
//! - `:q` or `:quit` → quit
//! - `:h` or `:help` → help
//! - `@filename` → load narrative text from a file
//! - `@@` → load narrative text from the clipboard

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        match cmd {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Map a parsed command onto the application event it triggers.
pub fn command_to_app_event(command: &Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path.clone()),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Unknown(input) => AppEvent::InvalidCommand(input.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_short_and_long() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_command("@story.txt"),
            Command::LoadFile("story.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
        assert_eq!(parse_command("@"), Command::LoadClipboard);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse_command(":wat"), Command::Unknown(":wat".to_string()));
        assert_eq!(parse_command("junk"), Command::Unknown("junk".to_string()));
        assert_eq!(parse_command(""), Command::Unknown(String::new()));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_command("  :q  "), Command::Quit);
        assert_eq!(
            parse_command("@ story.txt "),
            Command::LoadFile("story.txt".to_string())
        );
    }

    #[test]
    fn test_command_to_event() {
        assert_eq!(command_to_app_event(&Command::Quit), AppEvent::Quit);
        assert_eq!(
            command_to_app_event(&Command::LoadFile("a.txt".to_string())),
            AppEvent::LoadFile("a.txt".to_string())
        );
        assert_eq!(
            command_to_app_event(&Command::Unknown("x".to_string())),
            AppEvent::InvalidCommand("x".to_string())
        );
    }
}
