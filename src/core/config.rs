//! Resolve which Ollama server to talk to.

use std::env;

/// Environment variable holding the server root (also read from `.env`).
pub const BASE_URL_ENV: &str = "OLLAMA_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Where the base URL came from, for `config` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlSource {
    Flag,
    Env,
    Default,
}

impl std::fmt::Display for BaseUrlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--base-url"),
            Self::Env => write!(f, "{}", BASE_URL_ENV),
            Self::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub source: BaseUrlSource,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Base URL from {0} is empty")]
    EmptyBaseUrl(BaseUrlSource),
}

/// Load configuration. `flag` (from `--base-url`) wins over the environment.
pub fn load(flag: Option<&str>) -> Result<Config, ConfigError> {
    resolve(flag, env::var(BASE_URL_ENV).ok())
}

fn resolve(flag: Option<&str>, env_value: Option<String>) -> Result<Config, ConfigError> {
    let (raw, source) = match (flag, env_value) {
        (Some(f), _) => (f.to_string(), BaseUrlSource::Flag),
        (None, Some(v)) => (v, BaseUrlSource::Env),
        (None, None) => (DEFAULT_BASE_URL.to_string(), BaseUrlSource::Default),
    };
    let base_url = raw.trim().to_string();
    if base_url.is_empty() {
        return Err(ConfigError::EmptyBaseUrl(source));
    }
    Ok(Config { base_url, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_when_nothing_set() {
        let config = resolve(None, None).expect("config");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.source, BaseUrlSource::Default);
    }

    #[test]
    fn env_used_without_flag() {
        let config = resolve(None, Some("http://gpu-box:11434".into())).expect("config");
        assert_eq!(config.base_url, "http://gpu-box:11434");
        assert_eq!(config.source, BaseUrlSource::Env);
    }

    #[test]
    fn flag_beats_env() {
        let config =
            resolve(Some("http://flag:1"), Some("http://env:2".into())).expect("config");
        assert_eq!(config.base_url, "http://flag:1");
        assert_eq!(config.source, BaseUrlSource::Flag);
    }

    #[test]
    fn blank_value_is_an_error() {
        let err = resolve(None, Some("   ".into())).expect_err("blank env");
        assert_eq!(err.to_string(), "Base URL from OLLAMA_BASE_URL is empty");
        assert!(matches!(
            resolve(Some(""), None),
            Err(ConfigError::EmptyBaseUrl(BaseUrlSource::Flag))
        ));
    }
}
