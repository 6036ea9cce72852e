use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::ui::messages::warning;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_late_threshold")]
    pub default_late_threshold_minutes: i64,
    #[serde(default)]
    pub default_device_label: Option<String>,
}

fn default_late_threshold() -> i64 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_late_threshold_minutes: default_late_threshold(),
            default_device_label: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rollcall")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rollcall")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rollcall.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rollcall.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A corrupt file falls back to defaults with a warning instead of
    /// aborting, so `--db` overrides keep working.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                warning(format!("Could not parse {}: {e}", path.display()));
                Self::default()
            }),
            Err(e) => {
                warning(format!("Could not read {}: {e}", path.display()));
                Self::default()
            }
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("rollcall.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            default_late_threshold_minutes: default_late_threshold(),
            default_device_label: None,
        };

        // Write config file (skipped in test mode so test runs never touch
        // the user's real configuration)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(db_path)
    }
}
