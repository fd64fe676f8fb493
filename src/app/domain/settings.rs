use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{Result, ShellError};
use crate::app::infrastructure::platform::default_start_directory;
use crate::app::services::text_ops::MAX_TITLE_LENGTH;

/// Limits for the recent files list and its menu labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentFilesConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Labels longer than this are shortened.
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    #[serde(default = "default_head_length")]
    pub head_length: usize,

    #[serde(default = "default_tail_length")]
    pub tail_length: usize,
}

fn default_max_entries() -> usize {
    10
}

fn default_max_length() -> usize {
    40
}

fn default_head_length() -> usize {
    10
}

fn default_tail_length() -> usize {
    25
}

impl Default for RecentFilesConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            max_length: default_max_length(),
            head_length: default_head_length(),
            tail_length: default_tail_length(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellSettings {
    /// Organization folder the recent files store lives under.
    #[serde(default = "default_organization")]
    pub organization: String,

    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Extension offered by the open/save dialogs, without the dot.
    #[serde(default = "default_file_extension")]
    pub file_extension: Option<String>,

    /// Directory file dialogs start in. Falls back to ~/Documents.
    #[serde(default)]
    pub start_directory: Option<String>,

    #[serde(default)]
    pub recent_files: RecentFilesConfig,

    /// Confirmation and warning dialog titles are cut to this many characters.
    #[serde(default = "default_confirm_title_length")]
    pub confirm_title_length: usize,
}

fn default_organization() -> String {
    "Unknown organization".to_string()
}

fn default_app_name() -> String {
    "Classic Text Editor".to_string()
}

fn default_file_extension() -> Option<String> {
    Some("txt".to_string())
}

fn default_confirm_title_length() -> usize {
    MAX_TITLE_LENGTH
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            app_name: default_app_name(),
            file_extension: default_file_extension(),
            start_directory: None,
            recent_files: RecentFilesConfig::default(),
            confirm_title_length: default_confirm_title_length(),
        }
    }
}

impl ShellSettings {
    /// Directory the file dialogs open in.
    pub fn start_directory(&self) -> String {
        self.start_directory
            .clone()
            .unwrap_or_else(|| default_start_directory().to_string_lossy().to_string())
    }

    /// Reject limits the recent files registry cannot honour.
    pub fn validate(&self) -> Result<()> {
        let rf = &self.recent_files;
        if rf.max_entries == 0 {
            return Err(ShellError::Settings("max_entries must be at least 1".to_string()));
        }
        if rf.head_length + rf.tail_length > rf.max_length {
            return Err(ShellError::Settings(format!(
                "head_length + tail_length ({}) exceeds max_length ({})",
                rf.head_length + rf.tail_length,
                rf.max_length
            )));
        }
        if self.confirm_title_length == 0 {
            return Err(ShellError::Settings(
                "confirm_title_length must be at least 1".to_string(),
            ));
        }
        if self.app_name.trim().is_empty() {
            return Err(ShellError::Settings("app_name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(settings) => match settings.validate() {
                    Ok(()) => settings,
                    Err(e) => {
                        log::warn!("{}. Using defaults.", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(config_path) {
                    log::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("classicpad");
        path.push("settings.json");
        path
    }
}
