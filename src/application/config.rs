use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::thresholds::ThresholdSet;

/// Floor for the polling frequency. Values below are clamped (and logged)
/// at loop entry, not at load time, so a saved config keeps the user's
/// literal value.
pub const MIN_FREQUENCY_SECS: u64 = 5;

/// Flat application settings, stored as a single JSON object.
///
/// Missing keys fall back per-field to the defaults below; an absent file is
/// silently the full default set. Malformed JSON is a fatal parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_db_host")]
    pub db_host: String,
    #[serde(default = "default_db_name")]
    pub db_name: String,
    #[serde(default = "default_db_user")]
    pub db_user: String,
    #[serde(default)]
    pub db_password: String,
    /// Seconds between cycle starts in continuous mode.
    #[serde(default = "default_frequency")]
    pub frequency: u64,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default = "default_smtp_user")]
    pub smtp_user: String,
    #[serde(default)]
    pub smtp_password: String,
    /// Alert destination address.
    #[serde(default = "default_recipient")]
    pub recipient: String,
    #[serde(default = "default_temp_high")]
    pub temp_threshold_high: f32,
    #[serde(default = "default_temp_low")]
    pub temp_threshold_low: f32,
    #[serde(default = "default_humidity_high")]
    pub humidity_threshold_high: f32,
    #[serde(default = "default_humidity_low")]
    pub humidity_threshold_low: f32,
    /// I2C device node the sensor sits on.
    #[serde(default = "default_i2c_bus")]
    pub i2c_bus: String,
}

// --- Defaults ---

fn default_db_host() -> String {
    "localhost".into()
}

fn default_db_name() -> String {
    "sensor_data".into()
}

fn default_db_user() -> String {
    "sensor_user".into()
}

const fn default_frequency() -> u64 {
    60
}

fn default_smtp_host() -> String {
    "smtp.example.com".into()
}

const fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_user() -> String {
    "user@example.com".into()
}

fn default_recipient() -> String {
    "alert@example.com".into()
}

const fn default_temp_high() -> f32 {
    27.0
}

const fn default_temp_low() -> f32 {
    18.0
}

const fn default_humidity_high() -> f32 {
    80.0
}

const fn default_humidity_low() -> f32 {
    20.0
}

fn default_i2c_bus() -> String {
    "/dev/i2c-1".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_host: default_db_host(),
            db_name: default_db_name(),
            db_user: default_db_user(),
            db_password: String::new(),
            frequency: default_frequency(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_user: default_smtp_user(),
            smtp_password: String::new(),
            recipient: default_recipient(),
            temp_threshold_high: default_temp_high(),
            temp_threshold_low: default_temp_low(),
            humidity_threshold_high: default_humidity_high(),
            humidity_threshold_low: default_humidity_low(),
            i2c_bus: default_i2c_bus(),
        }
    }
}

// --- Config methods ---

impl Config {
    /// Load config from the default path.
    ///
    /// An absent file silently yields the defaults; it is not an error and
    /// nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined, the
    /// file cannot be read, or the JSON content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load from a specific path, falling back to defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        serde_json::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// write fails.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save config to a specific path, creating parent directories.
    ///
    /// The file is written as one JSON object with 4-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, serialization
    /// fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .context("Failed to serialize config")?;
        buf.push(b'\n');

        std::fs::write(path, buf).context("Failed to write config file")?;
        Ok(())
    }

    /// Alert bounds as a domain value object.
    #[must_use]
    pub const fn thresholds(&self) -> ThresholdSet {
        ThresholdSet {
            temperature_high: self.temp_threshold_high,
            temperature_low: self.temp_threshold_low,
            humidity_high: self.humidity_threshold_high,
            humidity_low: self.humidity_threshold_low,
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("hygrolog").join("config.json"))
    }
}
