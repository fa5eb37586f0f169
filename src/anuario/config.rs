use crate::error::{AnuarioError, Result};
use crate::filter::DEFAULT_PAGE_SIZE;
use crate::labels::Locale;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "todosPersonajes.csv";

/// Folder under the user's home holding the record file and config.
pub const APP_FOLDER: &str = "Reto3_Hogwarts_Anuario";

/// Environment variable overriding the app folder.
pub const HOME_ENV: &str = "ANUARIO_HOME";

/// Configuration for anuario, stored in `<app folder>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnuarioConfig {
    /// Language of field labels
    #[serde(default)]
    pub locale: Locale,

    /// Records per listing page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Record file name, relative to the app folder
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for AnuarioConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            page_size: DEFAULT_PAGE_SIZE,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl AnuarioConfig {
    pub const KEYS: [&'static str; 3] = ["locale", "page-size", "data-file"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AnuarioError::Io)?;
        let config: AnuarioConfig =
            serde_json::from_str(&content).map_err(AnuarioError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AnuarioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AnuarioError::Serialization)?;
        fs::write(config_path, content).map_err(AnuarioError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "locale" => Ok(self.locale.to_string()),
            "page-size" => Ok(self.page_size.to_string()),
            "data-file" => Ok(self.data_file.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "locale" => {
                self.locale = value
                    .parse()
                    .map_err(|_| AnuarioError::Config(format!("Unsupported locale: {}", value)))?;
            }
            "page-size" => {
                let size: usize = value.trim().parse().map_err(|_| {
                    AnuarioError::Config(format!("page-size must be a number: {}", value))
                })?;
                if size == 0 {
                    return Err(AnuarioError::Config(
                        "page-size must be greater than zero".to_string(),
                    ));
                }
                self.page_size = size;
            }
            "data-file" => {
                let name = value.trim();
                if name.is_empty() {
                    return Err(AnuarioError::Config("data-file cannot be empty".to_string()));
                }
                self.data_file = name.to_string();
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> AnuarioError {
    AnuarioError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        AnuarioConfig::KEYS.join(", ")
    ))
}

/// The app folder: `$ANUARIO_HOME` when set, else `<home>/Reto3_Hogwarts_Anuario`.
pub fn app_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let base = BaseDirs::new()
        .ok_or_else(|| AnuarioError::Config("Could not determine home directory".to_string()))?;
    Ok(base.home_dir().join(APP_FOLDER))
}
