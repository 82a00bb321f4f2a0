use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

fn default_storage_key() -> String {
  "afip-app-clientes".to_string()
}

fn default_storage_path() -> String {
  "./data/clients.json".to_string()
}

fn default_emission_base_url() -> String {
  "https://app.ifactura.com.ar/API".to_string()
}

fn default_lookup_base_url() -> String {
  "http://localhost:3000/api/afip".to_string()
}

fn default_timeout_seconds() -> u64 {
  30
}

fn default_redis_connect_timeout() -> u64 {
  5
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub storage: StorageConfig,
  pub emission: EmissionConfig,
  pub lookup: LookupConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
  Memory,
  File,
  Redis,
}

/// Client record storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
  pub backend: StorageBackend,
  #[serde(default = "default_storage_path")]
  pub path: String,
  pub redis_url: Option<String>,
  /// Key the whole record set is stored under
  #[serde(default = "default_storage_key")]
  pub key: String,
  #[serde(default = "default_redis_connect_timeout")]
  pub connect_timeout_seconds: u64,
}

/// Electronic invoice emission API credentials
#[derive(Debug, Clone, Deserialize)]
pub struct EmissionConfig {
  #[serde(default = "default_emission_base_url")]
  pub base_url: String,
  pub email: String,
  pub password: String,
  #[serde(default = "default_timeout_seconds")]
  pub timeout_seconds: u64,
}

/// Tax authority lookup configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
  #[serde(default = "default_lookup_base_url")]
  pub base_url: String,
  /// Serve canned taxpayer records instead of calling the lookup service
  #[serde(default)]
  pub simulated: bool,
  #[serde(default = "default_timeout_seconds")]
  pub timeout_seconds: u64,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with AFIPDESK_ prefix
  ///
  /// # Environment Variables
  ///
  /// Environment variables use the AFIPDESK_ prefix and are separated by double underscores:
  /// - `AFIPDESK_SERVER__PORT=8080`
  /// - `AFIPDESK_STORAGE__BACKEND=redis`
  /// - `AFIPDESK_STORAGE__REDIS_URL=redis://localhost`
  /// - `AFIPDESK_EMISSION__EMAIL=facturacion@example.com`
  /// - `AFIPDESK_EMISSION__PASSWORD=secret`
  /// - `AFIPDESK_LOOKUP__SIMULATED=true`
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("AFIPDESK")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}
