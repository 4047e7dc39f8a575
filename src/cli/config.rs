//! Configuration file support.
//!
//! Configuration lives in a JSON file under the application directory
//! (default `~/.qnote/config.json`). A missing file is created with
//! default values on first load.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration, one section per concern.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub editor: EditorConfig,
    pub storage: StorageConfig,
    pub display: DisplayConfig,
    pub tag: TagConfig,
    pub note: NoteConfig,
    pub notebook: NotebookConfig,

    /// Resolved application directory; not part of the file.
    #[serde(skip)]
    dir: PathBuf,
}

/// Editor settings.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Editor command, e.g. `"vim"` or `"code --wait"`.
    pub executable: Option<String>,
}

/// Storage settings.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding the database. Defaults to `<app dir>/storage`.
    pub dir_root: Option<PathBuf>,
}

/// Display settings for listings and note rendering.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Column at which content is wrapped and titles are shortened.
    pub width: usize,
    /// Show note UUIDs in listings.
    pub show_uuid: bool,
    /// Show modification dates in listings.
    pub show_date: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 80,
            show_uuid: false,
            show_date: false,
        }
    }
}

/// Tag parsing settings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TagConfig {
    /// Extract tags from `^^^...^^^` blocks in note content.
    pub auto_parse: bool,
    /// Remove those blocks from the stored content.
    pub auto_remove_from_content: bool,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            auto_parse: true,
            auto_remove_from_content: true,
        }
    }
}

/// Note settings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoteConfig {
    /// Column at which derived titles are truncated (word boundary).
    pub title_width: usize,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self { title_width: 64 }
    }
}

/// Notebook settings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotebookConfig {
    /// Name of the reserved default notebook.
    pub name_default: String,
    /// Name of the reserved trash notebook.
    pub name_trash: String,
    /// How many recent notes `status` shows.
    pub status_limit: usize,
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            name_default: "inbox".to_string(),
            name_trash: "trash".to_string(),
            status_limit: 5,
        }
    }
}

impl Config {
    /// Loads configuration, creating the file with defaults if missing.
    ///
    /// `dir_override` replaces the default application directory
    /// (`~/.qnote`); it is how tests and scripts get isolated state.
    pub fn load(dir_override: Option<&PathBuf>) -> Result<Self> {
        let dir = match dir_override {
            Some(dir) => dir.clone(),
            None => Self::default_dir(),
        };
        let config_path = dir.join("config.json");

        if !config_path.exists() {
            let mut config = Self::default();
            config.dir = dir.clone();
            config.write(&config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        let mut config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;
        config.dir = dir;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }
        let json = serde_json::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write config file: {}", path.display()))
    }

    /// Returns the default application directory: `~/.qnote`.
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".qnote")
    }

    /// Returns the resolved application directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the SQLite database path.
    pub fn db_path(&self) -> PathBuf {
        self.storage
            .dir_root
            .clone()
            .unwrap_or_else(|| self.dir.join("storage"))
            .join("qnote.db")
    }

    /// Returns the HEAD pointer file path.
    pub fn head_path(&self) -> PathBuf {
        self.dir.join("HEAD")
    }

    /// Returns the cached-selection file path.
    pub fn selection_path(&self) -> PathBuf {
        self.dir.join("selected")
    }

    /// Resolves the editor command.
    ///
    /// Precedence order:
    /// 1. `--editor` CLI argument
    /// 2. Config file `editor.executable` setting
    /// 3. $EDITOR environment variable
    /// 4. "vi" as fallback
    pub fn editor_command(&self, cli_editor: Option<&str>) -> String {
        cli_editor
            .map(|s| s.to_string())
            .or_else(|| self.editor.executable.clone())
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| "vi".to_string())
    }
}
