use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AdvisorError, Result};

/// Top-level configuration for the advisor.
///
/// Loaded from `~/.advisor/config.toml` by default. Every section is optional
/// and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    /// Directory of the file this config was loaded from.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl AdvisorConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: AdvisorConfig = toml::from_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AdvisorError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Resolved knowledge file path, if one is configured.
    ///
    /// `~/` expands to the home directory. Other relative paths are taken
    /// relative to the directory of the loaded config file.
    pub fn knowledge_path(&self) -> Option<PathBuf> {
        let path = self.knowledge.path.as_deref()?;
        Some(resolve_path(path, home_dir().as_deref(), self.base_dir.as_deref()))
    }
}

/// Expand `~/` against `home` and anchor other relative paths at `base_dir`.
pub fn resolve_path(path: &str, home: Option<&str>, base_dir: Option<&Path>) -> PathBuf {
    if path.starts_with("~/") || path.starts_with("~\\") {
        return PathBuf::from(home.unwrap_or(".")).join(&path[2..]);
    }
    let candidate = PathBuf::from(path);
    match base_dir {
        Some(base) if candidate.is_relative() => base.join(candidate),
        _ => candidate,
    }
}

fn home_dir() -> Option<String> {
    #[cfg(target_os = "windows")]
    let home = std::env::var("USERPROFILE").ok();
    #[cfg(not(target_os = "windows"))]
    let home = std::env::var("HOME").ok();
    home
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Chat surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Whether the assistant answers at all.
    pub enabled: bool,
    /// Pause before the assistant replies, in milliseconds.
    pub thinking_delay_ms: u64,
    /// Maximum accepted message length in characters.
    pub max_message_length: usize,
    /// Preset queries offered as one-click chips.
    pub suggestions: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            thinking_delay_ms: 800,
            max_message_length: 2000,
            suggestions: vec![
                "What ERP systems do you build?".to_string(),
                "Tell me about AI agents".to_string(),
                "How much does a project cost?".to_string(),
                "Book a consultation".to_string(),
            ],
        }
    }
}

/// Knowledge base source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Path to a TOML knowledge file. The built-in table is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
