//! Settings loader for config.toml and service URL resolution

use super::types::Settings;
use scrivi_core::prelude::*;
use std::path::{Path, PathBuf};
use url::Url;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "scrivi";

/// Environment variable overriding the configured service URL
pub const SERVICE_URL_ENV_VAR: &str = "SCRIVI_SERVICE_URL";

/// `<config_dir>/scrivi/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`, falling back to defaults.
///
/// A missing file is normal; an unreadable or unparsable one is logged.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("Ignoring {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn read_settings(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path)?;
    toml::from_str(&content).map_err(|e| Error::config(e.message()))
}

/// Pick the service URL: `cli_url`, then `SCRIVI_SERVICE_URL`, then the
/// config file (or its default).
///
/// Only `http` and `https` URLs with a host are accepted.
pub fn resolve_service_url(cli_url: Option<&str>, settings: &Settings) -> Result<Url> {
    let env_url = std::env::var(SERVICE_URL_ENV_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty());

    let (raw, source) = match (cli_url, env_url.as_deref()) {
        (Some(url), _) => (url, "--url"),
        (None, Some(url)) => (url, SERVICE_URL_ENV_VAR),
        (None, None) => (settings.service.base_url.as_str(), "config"),
    };
    let raw = raw.trim();

    let url = Url::parse(raw).map_err(|e| Error::invalid_service_url(raw, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::invalid_service_url(
                raw,
                format!("unsupported scheme '{}'", other),
            ))
        }
    }
    if url.host_str().is_none() {
        return Err(Error::invalid_service_url(raw, "missing host"));
    }

    debug!("Service URL {} (from {})", url, source);
    Ok(url)
}
