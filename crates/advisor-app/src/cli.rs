//! CLI argument definitions for the advisor.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Advisor — a scripted architectural advisor that answers from a keyword table.
#[derive(Parser, Debug)]
#[command(name = "advisor", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Knowledge file to use instead of the configured one.
    #[arg(short = 'k', long = "knowledge", global = true)]
    pub knowledge: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer a single question and exit.
    Ask {
        /// The question; multiple words are joined with spaces.
        #[arg(required = true)]
        query: Vec<String>,
        /// Print the reply as JSON.
        #[arg(long)]
        json: bool,
        /// Include every category's score.
        #[arg(long)]
        explain: bool,
    },
    /// Interactive chat session.
    Chat,
    /// List the knowledge base in scoring order.
    Categories,
    /// Operator console with canned commands.
    Console,
    /// Validate a knowledge file.
    Check {
        /// Path to the TOML knowledge file.
        file: PathBuf,
    },
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > ADVISOR_CONFIG env var > ~/.advisor/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("ADVISOR_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Knowledge file override, if any.
    ///
    /// Relative paths are anchored at the current directory so they are not
    /// re-resolved against the config file's directory.
    pub fn resolve_knowledge_path(&self) -> Option<String> {
        let path = self.knowledge.as_ref()?;
        let path = if path.is_relative() {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.clone())
        } else {
            path.clone()
        };
        Some(path.to_string_lossy().to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".advisor").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".advisor").join("config.toml");
    }
    PathBuf::from("config.toml")
}
