use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod prefs;

/// Application configuration: where the host snapshot and the persisted
/// plugin state live.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path to the host table snapshot (JSON).
    pub snapshot: String,
    /// Path to the saved timeline views file (YAML).
    pub saved_views: String,
    /// Path to the local preferences file (JSON).
    #[serde(default = "default_prefs_path")]
    pub prefs: String,
}

fn default_prefs_path() -> String {
    Config::config_dir()
        .join("prefs.json")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            snapshot: dir.join("snapshot.json").to_string_lossy().to_string(),
            saved_views: dir.join("views.yaml").to_string_lossy().to_string(),
            prefs: default_prefs_path(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tablelane")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tablelane")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tablelane.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| serde_yaml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory, the config file and an
    /// empty saved-views file.
    pub fn init_all(is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("Config file: {:?}", Self::config_file());
        }

        println!("Snapshot:    {}", config.snapshot);
        println!("Saved views: {}", config.saved_views);

        Ok(())
    }
}
