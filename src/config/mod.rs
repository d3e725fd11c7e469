use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate;

/// Environment variable that overrides the configured workbook path.
pub const DB_ENV_VAR: &str = "RCLINIC_DB";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_clinic_name")]
    pub clinic_name: String,
    /// Default appointment length in minutes.
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: i64,
    /// Optional logo printed on the evaluation sheet.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_clinic_name() -> String {
    "Gestão Clínica Total".to_string()
}
fn default_slot_minutes() -> i64 {
    60
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            clinic_name: default_clinic_name(),
            slot_minutes: default_slot_minutes(),
            logo: None,
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rclinic")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rclinic")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rclinic.conf")
    }

    /// Return the default path of the workbook ("sistema_clinica")
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("sistema_clinica.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// `RCLINIC_DB` wins over the file's `database` entry.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            Config::default()
        };

        if let Ok(db) = env::var(DB_ENV_VAR)
            && !db.trim().is_empty()
        {
            cfg.database = db;
        }

        if cfg.slot_minutes <= 0 {
            return Err(AppError::Config(format!(
                "slot_minutes must be positive, found {}",
                cfg.slot_minutes
            )));
        }

        Ok(cfg)
    }

    /// A bare workbook name lives in the config directory; `~/` and
    /// absolute paths are taken as given.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = crate::utils::path::expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Separator character used under table headers.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Initialize configuration and workbook files.
    /// Returns the workbook path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Workbook name: user provided or default
        let db_path = match custom_name {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create empty workbook file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
