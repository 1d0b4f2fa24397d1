//! Configuration
//!
//! Values are baked in at build time from the environment, the usual way
//! for a static WASM bundle:
//! - `SIS_API_URL`: base URL of the REST API (default `http://localhost:3000`)
//! - `SIS_LOG_LEVEL`: console log level (default `info`)

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl Config {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SIS_API_URL"), option_env!("SIS_LOG_LEVEL"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let log_level = log_level
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self {
            api_base_url,
            log_level,
        }
    }
}
