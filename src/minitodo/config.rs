use crate::error::Result;
use crate::model::MAX_TODOS;
use crate::session::Navigation;
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DUE_SOON_DAYS: i64 = 2;
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for minitodo, stored as `config.json` in the platform config
/// directory. Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoConfig {
    /// Where todos are persisted, relative to the working directory unless absolute
    pub data_file: PathBuf,

    /// Maximum number of todos; adds beyond it are ignored
    pub max_todos: usize,

    /// A due date closer than this many days is highlighted as due soon
    pub due_soon_days: i64,

    /// How up/down move the selection while filters are active
    pub navigation: Navigation,

    /// Log filter directive, e.g. "warn" or "minitodo=debug"
    pub log_level: String,

    /// Log file, overriding the default in the platform data directory
    pub log_file: Option<PathBuf>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            max_todos: MAX_TODOS,
            due_soon_days: DEFAULT_DUE_SOON_DAYS,
            navigation: Navigation::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TodoConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Like [`TodoConfig::load`], but an unreadable or invalid file also yields defaults.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        Self::load(config_dir).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable config");
            Self::default()
        })
    }
}
