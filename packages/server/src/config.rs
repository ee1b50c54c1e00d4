//! Server configuration read from the environment at startup.

use std::str::FromStr;

use carrier_intel_generate::{DEFAULT_CARRIER_COUNT, DEFAULT_SEED};

/// Port used when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 8501;

/// Bind address used when `BIND_ADDR` is unset. Binds all interfaces so
/// the server is reachable when running headless in a container.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Startup configuration for [`crate::serve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`BIND_ADDR`).
    pub bind_addr: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Population seed (`CARRIER_SEED`).
    pub seed: u64,
    /// Population size (`CARRIER_COUNT`).
    pub carrier_count: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            seed: DEFAULT_SEED,
            carrier_count: DEFAULT_CARRIER_COUNT,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Missing
    /// values use the defaults; unparseable values are logged and also
    /// use the defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: parse_or(&lookup, "PORT", defaults.port),
            seed: parse_or(&lookup, "CARRIER_SEED", defaults.seed),
            carrier_count: parse_or(&lookup, "CARRIER_COUNT", defaults.carrier_count),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {key}={raw:?}, using {default}");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 8501);
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.seed, 42);
        assert_eq!(config.carrier_count, 500);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("BIND_ADDR", "127.0.0.1"),
            ("CARRIER_SEED", "7"),
            ("CARRIER_COUNT", " 100 "),
        ]));
        assert_eq!(config.port, 9000);
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.seed, 7);
        assert_eq!(config.carrier_count, 100);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "eighty"), ("CARRIER_SEED", "-1")]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.seed, DEFAULT_SEED);
    }
}
