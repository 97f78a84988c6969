//! Configuration management
//!
//! The configuration file is optional. When it is absent every field falls
//! back to its default, which reproduces the stock calculator behaviour.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub tips: TipsConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("energy-analyzer").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults; nothing is written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the calculator cannot work with
    pub fn validate(&self) -> Result<()> {
        if ColorMode::parse(&self.general.color).is_none() {
            return Err(Error::Config(format!(
                "general.color must be \"auto\", \"always\" or \"never\", got \"{}\"",
                self.general.color
            )));
        }
        if self.report.path.as_os_str().is_empty() {
            return Err(Error::Config("report.path must not be empty".to_string()));
        }

        let t = &self.tips;
        let thresholds = [
            ("tips.heavy_load_kwh", t.heavy_load_kwh),
            ("tips.long_run_hours", t.long_run_hours),
            ("tips.high_power_watts", t.high_power_watts),
            ("tips.high_tariff", t.high_tariff),
            ("tips.low_power_watts", t.low_power_watts),
            ("tips.always_on_hours", t.always_on_hours),
        ];
        for (field, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "{} must be a non-negative number, got {}",
                    field, value
                )));
            }
        }

        Ok(())
    }

    /// Resolved colour mode (defaults to auto when unrecognised)
    pub fn color_mode(&self) -> ColorMode {
        ColorMode::parse(&self.general.color).unwrap_or(ColorMode::Auto)
    }
}

/// When to emit ANSI styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Whether styling is on, given whether stdout is a terminal
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Color: "auto", "always", "never"
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

/// Pricing display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String { "\u{20B9}".to_string() } // Rupee sign

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Report file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output path, relative to the working directory unless absolute
    #[serde(default = "default_report_path")]
    pub path: PathBuf,
}

fn default_report_path() -> PathBuf { PathBuf::from("energy_report.txt") }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: default_report_path(),
        }
    }
}

/// Thresholds for the usage tips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipsConfig {
    /// Total daily kWh above which heavy loads should be staggered
    #[serde(default = "default_heavy_load_kwh")]
    pub heavy_load_kwh: f64,
    /// Top device daily hours above which it counts as long-running
    #[serde(default = "default_long_run_hours")]
    pub long_run_hours: f64,
    /// Top device watts above which it counts as high power
    #[serde(default = "default_high_power_watts")]
    pub high_power_watts: f64,
    /// Tariff above which savings are called out
    #[serde(default = "default_high_tariff")]
    pub high_tariff: f64,
    /// Watts below which a device counts as low power
    #[serde(default = "default_low_power_watts")]
    pub low_power_watts: f64,
    /// Daily hours above which a low-power device counts as always on
    #[serde(default = "default_always_on_hours")]
    pub always_on_hours: f64,
}

fn default_heavy_load_kwh() -> f64 { 15.0 }
fn default_long_run_hours() -> f64 { 8.0 }
fn default_high_power_watts() -> f64 { 200.0 }
fn default_high_tariff() -> f64 { 9.0 }
fn default_low_power_watts() -> f64 { 80.0 }
fn default_always_on_hours() -> f64 { 10.0 }

impl Default for TipsConfig {
    fn default() -> Self {
        Self {
            heavy_load_kwh: default_heavy_load_kwh(),
            long_run_hours: default_long_run_hours(),
            high_power_watts: default_high_power_watts(),
            high_tariff: default_high_tariff(),
            low_power_watts: default_low_power_watts(),
            always_on_hours: default_always_on_hours(),
        }
    }
}
