//! Configuration for scrivi
//!
//! Supports `<config_dir>/scrivi/config.toml` plus the `SCRIVI_SERVICE_URL`
//! environment override for the service address.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, load_settings, resolve_service_url, SERVICE_URL_ENV_VAR,
};
pub use types::{BehaviorSettings, ServiceSettings, Settings, UiSettings, DEFAULT_SERVICE_URL};
