//! Service Configuration
//!
//! Settings are read from environment variables and can be overridden with
//! `--flag value` pairs on the command line.
//!
//! | Variable                     | Flag        | Default                 |
//! |------------------------------|-------------|-------------------------|
//! | `AUTOCOMPLETE_BIND`          | `--bind`    | `0.0.0.0:8001`          |
//! | `ELASTICSEARCH_URL`          | `--elastic` | `http://localhost:9200` |
//! | `ELASTICSEARCH_TIMEOUT_SECS` | `--timeout` | `10`                    |

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::time::Duration;

pub const ENV_BIND: &str = "AUTOCOMPLETE_BIND";
pub const ENV_ELASTIC_URL: &str = "ELASTICSEARCH_URL";
pub const ENV_ELASTIC_TIMEOUT: &str = "ELASTICSEARCH_TIMEOUT_SECS";

pub const DEFAULT_BIND: &str = "0.0.0.0:8001";
pub const DEFAULT_ELASTIC_URL: &str = "http://localhost:9200";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the search backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElasticConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for ElasticConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ELASTIC_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Settings for the autocomplete HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub elastic: ElasticConfig,
}

impl ServiceConfig {
    /// Loads from the process environment, then applies command-line overrides.
    pub fn load(args: &[String]) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), args)
    }

    /// Same as [`ServiceConfig::load`] with an injectable environment.
    pub fn from_lookup<F>(lookup: F, args: &[String]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind = lookup(ENV_BIND).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let mut elastic = ElasticConfig::from_lookup(&lookup)?;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind = flag_value(args, i)?.to_string();
                    i += 2;
                }
                "--elastic" => {
                    elastic.url = flag_value(args, i)?.to_string();
                    i += 2;
                }
                "--timeout" => {
                    elastic.timeout = parse_timeout(flag_value(args, i)?)?;
                    i += 2;
                }
                other => {
                    tracing::warn!("Ignoring unknown argument: {}", other);
                    i += 1;
                }
            }
        }

        let bind_addr = bind
            .parse()
            .with_context(|| format!("invalid bind address '{}'", bind))?;

        Ok(Self { bind_addr, elastic })
    }
}

impl ElasticConfig {
    /// Reads `ELASTICSEARCH_URL` and `ELASTICSEARCH_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_ELASTIC_URL).filter(|u| !u.trim().is_empty()) {
            config.url = url;
        }
        if let Some(secs) = lookup(ENV_ELASTIC_TIMEOUT) {
            config.timeout = parse_timeout(&secs)?;
        }
        Ok(config)
    }
}

/// Value following the flag at `i`.
pub fn flag_value(args: &[String], i: usize) -> Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{} requires a value", args[i]))
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid timeout '{}'", raw))?;
    anyhow::ensure!(secs > 0, "timeout must be greater than zero");
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests;
