use crate::application::scheduler::DEFAULT_REFRESH_PERIOD;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub sheet: SheetSettings,
    #[serde(default)]
    pub refresh: RefreshSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SheetSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub sheet_id: String,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_window")]
    pub window: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl RefreshSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_base_url() -> String {
    "https://docs.google.com/spreadsheets/d".to_string()
}

fn default_sheet_name() -> String {
    "plant_readings".to_string()
}

fn default_window() -> usize {
    20
}

fn default_interval_secs() -> u64 {
    DEFAULT_REFRESH_PERIOD.as_secs()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

/// Optional `config/dashboard.*` file, overridden by `DASHBOARD__*` env vars
/// (e.g. `DASHBOARD__SHEET__SHEET_ID`).
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> anyhow::Result<AppConfig> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    #[test]
    fn test_defaults_fill_missing_settings() {
        let config = from_toml("[sheet]\nsheet_id = \"abc123\"\n").unwrap();

        assert_eq!(config.sheet.sheet_id, "abc123");
        assert_eq!(config.sheet.sheet_name, "plant_readings");
        assert_eq!(config.sheet.base_url, "https://docs.google.com/spreadsheets/d");
        assert_eq!(config.sheet.window, 20);
        assert_eq!(config.refresh.interval(), Duration::from_secs(60));
        assert_eq!(config.server.bind, "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = from_toml(
            "[sheet]\nsheet_id = \"abc\"\nsheet_name = \"greenhouse\"\n[refresh]\ninterval_secs = 15\n",
        )
        .unwrap();

        assert_eq!(config.sheet.sheet_name, "greenhouse");
        assert_eq!(config.refresh.interval_secs, 15);
        assert_eq!(config.refresh.request_timeout_secs, 30);
    }

    #[test]
    fn test_sheet_id_is_required() {
        assert!(from_toml("[sheet]\nsheet_name = \"x\"\n").is_err());
    }
}
