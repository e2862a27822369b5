//! Operator console: exact-match commands with canned responses.

use std::fmt;

/// Recognised console commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Help,
    Status,
    Scan,
    Purge,
    Optimize,
    Exit,
    Unknown(String),
}

impl ConsoleCommand {
    /// Parse a console line. Input is trimmed and lowercased; blank lines
    /// yield `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let cmd = input.trim().to_lowercase();
        let parsed = match cmd.as_str() {
            "" => return None,
            "help" => Self::Help,
            "status" => Self::Status,
            "scan" => Self::Scan,
            "purge" => Self::Purge,
            "optimize" => Self::Optimize,
            "exit" => Self::Exit,
            _ => Self::Unknown(cmd),
        };
        Some(parsed)
    }

    /// Canned response text. `Exit` has none.
    pub fn response(&self) -> Option<String> {
        let text = match self {
            Self::Help => "Available commands: status, scan, purge, optimize, exit".to_string(),
            Self::Status => "System: ACTIVE | Nodes: 12/12 | Load: OPTIMAL".to_string(),
            Self::Scan => "Security scan complete. Threats detected: 0.".to_string(),
            Self::Purge => "Purging temporary cache... [SUCCESS]".to_string(),
            Self::Optimize => "Re-indexing edge node buffers... [SUCCESS]".to_string(),
            Self::Exit => return None,
            Self::Unknown(cmd) => format!("Command unknown: {}. Type 'help' for options.", cmd),
        };
        Some(text)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Help => "help",
            Self::Status => "status",
            Self::Scan => "scan",
            Self::Purge => "purge",
            Self::Optimize => "optimize",
            Self::Exit => "exit",
            Self::Unknown(cmd) => cmd,
        }
    }
}

/// Result of feeding one line to the console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleOutcome {
    /// Blank input; nothing to print.
    Ignored,
    /// Echoed command plus its response.
    Output { command: String, response: String },
    /// The operator asked to leave.
    Exit,
}

impl fmt::Display for ConsoleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignored | Self::Exit => Ok(()),
            Self::Output { command, response } => write!(f, "> {}\n{}", command, response),
        }
    }
}

/// Stateless console dispatcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Console {
    pub fn execute(&self, input: &str) -> ConsoleOutcome {
        let Some(command) = ConsoleCommand::parse(input) else {
            return ConsoleOutcome::Ignored;
        };
        tracing::debug!(command = command.as_str(), "Console command");
        match command.response() {
            Some(response) => ConsoleOutcome::Output {
                command: command.as_str().to_string(),
                response,
            },
            None => ConsoleOutcome::Exit,
        }
    }
}
