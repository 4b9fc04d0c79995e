// ⚙️ Configuration - environment driven, with logged defaults

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HINT_TIMEOUT_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,

    /// JSON file extending the built-in catalog
    pub catalog_overrides: Option<PathBuf>,

    /// Order API base URL; product lookups are disabled when unset
    pub megawin_api_url: Option<String>,

    pub megawin_api_key: Option<String>,

    pub hint_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            catalog_overrides: None,
            megawin_api_url: None,
            megawin_api_key: None,
            hint_timeout: Duration::from_millis(DEFAULT_HINT_TIMEOUT_MS),
        }
    }
}

impl Config {
    /// Read configuration from the process environment
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, so tests need not touch the environment
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Config {
            port: parse_or(var("SORTIMENT_PORT"), "SORTIMENT_PORT", DEFAULT_PORT),
            catalog_overrides: var("SORTIMENT_CATALOG_OVERRIDES").map(PathBuf::from),
            megawin_api_url: var("MEGAWIN_API_URL"),
            megawin_api_key: var("MEGAWIN_API_KEY"),
            hint_timeout: Duration::from_millis(parse_or(
                var("SORTIMENT_HINT_TIMEOUT_MS"),
                "SORTIMENT_HINT_TIMEOUT_MS",
                DEFAULT_HINT_TIMEOUT_MS,
            )),
        }
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match value {
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
    }
}
