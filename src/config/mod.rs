use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Tool configuration: default output workbook names and preview size.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_projects_file")]
    pub projects_file: String,
    #[serde(default = "default_hr_file")]
    pub hr_file: String,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_projects_file() -> String {
    "projects.xlsx".to_string()
}
fn default_hr_file() -> String {
    "hr.xlsx".to_string()
}
fn default_preview_rows() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects_file: default_projects_file(),
            hr_file: default_hr_file(),
            preview_rows: default_preview_rows(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("clockify-report")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".clockify-report")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("clockify-report.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Write the configuration file with the current values
    pub fn init_all(&self) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self).map_err(|e| io::Error::other(e.to_string()))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        Ok(())
    }
}
