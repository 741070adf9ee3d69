use crate::core::store::DEFAULT_STORAGE_KEY;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::{DEFAULT_DISPLAY_FORMAT, is_valid_format};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_storage_dir() -> String {
    Config::config_dir().to_string_lossy().to_string()
}
fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_date_format() -> String {
    DEFAULT_DISPLAY_FORMAT.to_string()
}
fn default_wrap_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            storage_key: default_storage_key(),
            date_format: default_date_format(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rtodo")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtodo")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtodo.conf")
    }

    /// Directory holding the storage files, with `~/` expanded
    pub fn storage_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.storage_dir)
    }

    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Self = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;

        if !is_valid_format(&cfg.date_format) {
            return Err(AppError::ConfigLoad(format!(
                "{}: invalid date_format '{}'",
                path.display(),
                cfg.date_format
            )));
        }

        Ok(cfg)
    }

    /// Initialize the configuration directory and file.
    ///
    /// `storage_override` replaces the default storage directory; with
    /// `is_test` the config file is left untouched.
    pub fn init_all(storage_override: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let mut config = Self::load().unwrap_or_default();
        if let Some(custom) = storage_override {
            config.storage_dir = custom.to_string();
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}
