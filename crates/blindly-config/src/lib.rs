//! Shared configuration for the blindly CLI.
//!
//! TOML file + `BLINDLY_*` environment resolution, factory-key handling,
//! and translation to `blindly_core::BridgeConfig`. The factory key comes
//! from the Connector app: Settings → About, tap the version 4 times.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use blindly_api::TransportConfig;
use blindly_core::BridgeConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no factory key configured (set `key` in the config file or BLINDLY_KEY)")]
    NoKey,

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Factory key from the Connector app (plaintext — prefer BLINDLY_KEY).
    pub key: Option<String>,

    /// Reply wait in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Override the hub address (unicast, for hubs across subnets).
    /// Defaults to the protocol's multicast group when unset.
    pub hub_addr: Option<String>,

    /// Default output format for the CLI.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key: None,
            timeout: default_timeout(),
            hub_addr: None,
            output: default_output(),
        }
    }
}

fn default_timeout() -> u64 {
    3
}
fn default_output() -> String {
    "table".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "blindly", "blindly").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("blindly");
    p
}

// ── Config loading / saving ─────────────────────────────────────────

/// Load the full Config from defaults + file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("BLINDLY_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning the defaults if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// Serialize config to TOML and write it to the canonical path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Resolution ──────────────────────────────────────────────────────

/// Resolve the factory key from the merged config.
pub fn resolve_key(config: &Config) -> Result<SecretString, ConfigError> {
    config
        .key
        .clone()
        .map(SecretString::from)
        .ok_or(ConfigError::NoKey)
}

/// Build a `BridgeConfig` from the merged config.
pub fn to_bridge_config(config: &Config) -> Result<BridgeConfig, ConfigError> {
    let key = resolve_key(config)?;

    let mut transport = TransportConfig {
        timeout: Duration::from_secs(config.timeout),
        ..TransportConfig::default()
    };
    if let Some(ref addr) = config.hub_addr {
        transport.target = addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Validation {
                field: "hub_addr".into(),
                reason: format!("invalid socket address: {addr}"),
            })?;
    }

    Ok(BridgeConfig { key, transport })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_protocol() {
        let cfg = Config::default();
        assert_eq!(cfg.timeout, 3);
        assert_eq!(cfg.output, "table");
        assert!(cfg.key.is_none());
        assert!(cfg.hub_addr.is_none());
    }

    #[test]
    fn missing_key_is_an_explicit_error() {
        let cfg = Config::default();
        assert!(matches!(resolve_key(&cfg), Err(ConfigError::NoKey)));
    }

    #[test]
    fn bridge_config_uses_the_multicast_default_unless_overridden() {
        let cfg = Config {
            key: Some("74ae544c-d16e-4c".into()),
            ..Config::default()
        };
        let bridge = to_bridge_config(&cfg).expect("builds");
        assert_eq!(bridge.transport.target.to_string(), "238.0.0.18:32100");
        assert_eq!(bridge.transport.timeout, Duration::from_secs(3));
    }

    #[test]
    fn hub_addr_override_and_validation() {
        let mut cfg = Config {
            key: Some("74ae544c-d16e-4c".into()),
            hub_addr: Some("192.168.1.50:32100".into()),
            ..Config::default()
        };
        let bridge = to_bridge_config(&cfg).expect("builds");
        assert_eq!(bridge.transport.target.to_string(), "192.168.1.50:32100");

        cfg.hub_addr = Some("not-an-address".into());
        assert!(matches!(
            to_bridge_config(&cfg),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn env_overrides_file_values() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", "timeout = 10\n")?;
            jail.set_env("BLINDLY_TIMEOUT", "7");
            jail.set_env("BLINDLY_KEY", "74ae544c-d16e-4c");

            let figment = Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Toml::file("config.toml"))
                .merge(Env::prefixed("BLINDLY_"));
            let cfg: Config = figment.extract()?;

            assert_eq!(cfg.timeout, 7);
            assert_eq!(cfg.key.as_deref(), Some("74ae544c-d16e-4c"));
            Ok(())
        });
    }
}
