//! # Configuration
//!
//! Manages the loading and parsing of the bot's configuration file (`config.yaml`).
//! Every section has defaults, so the bot can also be configured from the
//! environment alone (see [`AppConfig::apply_env`]).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "data/config.yaml";

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub reply: ReplyConfig,
}

/// Configuration for the connected services.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct ServicesConfig {
    #[serde(default)]
    pub matrix: MatrixConfig,
    #[serde(default)]
    pub sheets: SheetsConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct MatrixConfig {
    #[serde(default)]
    pub homeserver: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Where the recipe spreadsheet lives and how to authenticate against it.
#[derive(Debug, Deserialize, Clone)]
pub struct SheetsConfig {
    /// Spreadsheet name, resolved to an id through Drive at startup.
    #[serde(default = "default_table_name")]
    pub table_name: String,
    /// Skips the name lookup when set.
    #[serde(default)]
    pub spreadsheet_id: Option<String>,
    /// Service-account key locations, tried in order.
    #[serde(default = "default_credentials_paths")]
    pub credentials_paths: Vec<String>,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            table_name: default_table_name(),
            spreadsheet_id: None,
            credentials_paths: default_credentials_paths(),
        }
    }
}

fn default_table_name() -> String {
    "Калькуляции для GPT".to_string()
}

fn default_credentials_paths() -> Vec<String> {
    let mut paths = vec![
        "google_key.json".to_string(),
        "data/google_key.json".to_string(),
        "/etc/secrets/google_key.json".to_string(),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(
            dir.join("coffee-bot")
                .join("google_key.json")
                .to_string_lossy()
                .into_owned(),
        );
    }
    paths
}

/// Liveness endpoint used by the hosting platform's health check.
#[derive(Debug, Deserialize, Clone)]
pub struct HealthConfig {
    #[serde(default = "default_health_host")]
    pub host: String,
    #[serde(default = "default_health_port")]
    pub port: u16,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            host: default_health_host(),
            port: default_health_port(),
        }
    }
}

fn default_health_host() -> String {
    "0.0.0.0".to_string()
}
fn default_health_port() -> u16 {
    5000
}

/// Limits applied when answering searches.
#[derive(Debug, Deserialize, Clone)]
pub struct ReplyConfig {
    /// Maximum entries shown in a free-text match list.
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
    /// Maximum characters packed into one outgoing message by `/all`.
    #[serde(default = "default_message_budget")]
    pub message_budget: usize,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            list_limit: default_list_limit(),
            message_budget: default_message_budget(),
        }
    }
}

fn default_list_limit() -> usize {
    10
}
fn default_message_budget() -> usize {
    3500
}

impl AppConfig {
    /// Reads the YAML file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to `null`, not to an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Overrides file values with environment variables.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let matrix = &mut self.services.matrix;
        if let Some(v) = lookup("MATRIX_HOMESERVER") {
            matrix.homeserver = v;
        }
        if let Some(v) = lookup("MATRIX_USERNAME") {
            matrix.username = v;
        }
        if let Some(v) = lookup("MATRIX_PASSWORD") {
            matrix.password = v;
        }

        let sheets = &mut self.services.sheets;
        if let Some(v) = lookup("TABLE_NAME") {
            sheets.table_name = v;
        }
        if let Some(v) = lookup("SPREADSHEET_ID") {
            sheets.spreadsheet_id = Some(v);
        }
        if let Some(v) = lookup("GOOGLE_CREDENTIALS_PATH") {
            sheets.credentials_paths.insert(0, v);
        }

        if let Some(v) = lookup("PORT") {
            self.health.port = v
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {v}"))?;
        }
        Ok(())
    }

    /// Names of required settings that are still empty.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let matrix = &self.services.matrix;
        let mut missing = Vec::new();
        if matrix.homeserver.trim().is_empty() {
            missing.push("MATRIX_HOMESERVER");
        }
        if matrix.username.trim().is_empty() {
            missing.push("MATRIX_USERNAME");
        }
        if matrix.password.is_empty() {
            missing.push("MATRIX_PASSWORD");
        }
        if self.services.sheets.table_name.trim().is_empty()
            && self.services.sheets.spreadsheet_id.is_none()
        {
            missing.push("TABLE_NAME");
        }
        missing
    }
}
