use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_against;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_TIMEZONE: &str = "America/New_York";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Civil time zone in which event dates are interpreted.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("status.yaml")
        .to_string_lossy()
        .to_string()
}
fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}
fn default_recent_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            timezone: default_timezone(),
            recent_limit: default_recent_limit(),
        }
    }
}

/// Written by `init` when no data file exists yet.
const DATA_TEMPLATE: &str = "\
# Golf event log. One entry per date (YYYY-MM-DD, US Eastern).
# type: golf | arrival | departure | golf_arrival | golf_departure
term_start: 2025-01-20
location_costs:
  \"Mar-a-Lago\": 3400000
  \"Bedminster, NJ\": 1300000
  \"Washington, DC\": 100000
events: {}
";

impl Config {
    /// Return the standard configuration directory (`~/.golfstats`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".golfstats")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("golfstats.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Data file path with `~` expanded and relative paths resolved against
    /// the config directory.
    pub fn data_path(&self) -> PathBuf {
        resolve_against(&self.data_file, &Self::config_dir())
    }

    /// Create the config directory, the config file (unless `is_test`) and a
    /// data file template if none exists. Returns the data file path.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Self::default();
        if let Some(data) = custom_data {
            config.data_file = data;
        }

        if !is_test {
            config.save()?;
        }

        let data_path = config.data_path();
        if !data_path.exists() {
            if let Some(parent) = data_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&data_path, DATA_TEMPLATE)?;
        }

        Ok(data_path)
    }
}
