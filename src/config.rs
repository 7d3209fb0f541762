use std::env;
use std::net::SocketAddr;

use crate::error::AppError;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub bind_addr: SocketAddr,
    pub access_token: Option<String>,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so callers other than the
    /// process environment (tests, `.env` overrides) can feed it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "API_BASE_URL must be an http(s) url, got {}",
                api_base_url
            )));
        }

        let bind_addr = lookup("BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is invalid ({}): {}", bind_addr, e)))?;

        let access_token = lookup("ACCESS_TOKEN").filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            bind_addr,
            access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn trailing_slash_is_dropped_and_blank_token_ignored() {
        let config = AppConfig::from_lookup(lookup(&[
            ("API_BASE_URL", "http://172.16.0.47:8000/"),
            ("ACCESS_TOKEN", "  "),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "http://172.16.0.47:8000");
        assert!(config.access_token.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(AppConfig::from_lookup(lookup(&[("API_BASE_URL", "ftp://x")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("BIND_ADDR", "nope")])).is_err());
    }
}
