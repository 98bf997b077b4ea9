//! Client configuration loaded from environment

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use url::Url;

use arena_client_ports::config::{ClientConfig, ShellKind, DEFAULT_API_BASE_URL};
use arena_domain::BearerToken;

/// Environment variable names
pub mod env_keys {
    pub const API_BASE_URL: &str = "ARENA_API_BASE_URL";
    pub const ASSET_BASE_URL: &str = "ARENA_ASSET_BASE_URL";
    pub const SHELL: &str = "ARENA_SHELL";
    pub const STRICT_VALIDATION: &str = "ARENA_STRICT_VALIDATION";
    pub const STORAGE_DIR: &str = "ARENA_STORAGE_DIR";
    pub const BEARER_TOKEN: &str = "ARENA_BEARER_TOKEN";
}

/// Where configuration values come from.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }
}

impl<F: Fn(&str) -> Option<String>> ConfigSource for F {
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Build configuration from `source`, falling back to defaults for unset keys.
pub fn client_config_from(source: &impl ConfigSource) -> Result<ClientConfig> {
    let api_base_url = source
        .get(env_keys::API_BASE_URL)
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let api_base_url = Url::parse(api_base_url.trim())
        .with_context(|| format!("{} must be an absolute URL", env_keys::API_BASE_URL))?;

    let asset_base_url = match source.get(env_keys::ASSET_BASE_URL) {
        Some(raw) => Url::parse(raw.trim())
            .with_context(|| format!("{} must be an absolute URL", env_keys::ASSET_BASE_URL))?,
        None => api_base_url.clone(),
    };

    let shell = match source.get(env_keys::SHELL) {
        Some(raw) => raw
            .parse::<ShellKind>()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("{} must be 'desktop' or 'mobile'", env_keys::SHELL))?,
        None => ShellKind::default(),
    };

    let strict_validation = source
        .get(env_keys::STRICT_VALIDATION)
        .map(|raw| parse_flag(&raw))
        .unwrap_or(false);

    let storage_dir = source.get(env_keys::STORAGE_DIR).map(PathBuf::from);

    Ok(ClientConfig {
        api_base_url,
        asset_base_url,
        shell,
        strict_validation,
        storage_dir,
    })
}

/// Token to seed into storage on startup, standing in for an external login.
pub fn bearer_token_from(source: &impl ConfigSource) -> Option<BearerToken> {
    source.get(env_keys::BEARER_TOKEN).and_then(BearerToken::new)
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = client_config_from(&source(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_all_variables() {
        let config = client_config_from(&source(&[
            ("ARENA_API_BASE_URL", "https://api.example.com"),
            ("ARENA_ASSET_BASE_URL", "https://cdn.example.com/"),
            ("ARENA_SHELL", "mobile"),
            ("ARENA_STRICT_VALIDATION", "true"),
            ("ARENA_STORAGE_DIR", "/tmp/arena"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url.as_str(), "https://api.example.com/");
        assert_eq!(config.asset_base_url.as_str(), "https://cdn.example.com/");
        assert_eq!(config.shell, ShellKind::Mobile);
        assert!(config.strict_validation);
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/arena")));
    }

    #[test]
    fn test_invalid_url_is_an_error() {
        let err = client_config_from(&source(&[("ARENA_API_BASE_URL", "not a url")]))
            .unwrap_err();
        assert!(err.to_string().contains("ARENA_API_BASE_URL"));
    }

    #[test]
    fn test_invalid_shell_is_an_error() {
        assert!(client_config_from(&source(&[("ARENA_SHELL", "tablet")])).is_err());
    }

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" YES "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }

    #[test]
    fn test_bearer_token_seed() {
        assert!(bearer_token_from(&source(&[])).is_none());
        assert!(bearer_token_from(&source(&[("ARENA_BEARER_TOKEN", "  ")])).is_none());
        let token = bearer_token_from(&source(&[("ARENA_BEARER_TOKEN", "abc")])).unwrap();
        assert_eq!(token.as_str(), "abc");
    }
}
