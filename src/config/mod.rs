use std::time::Duration;

use crate::errors::{TedditError, TedditResult};

pub const DEFAULT_FEED_URL: &str = "https://www.reddit.com/hot.json";
pub const DEFAULT_COMMENTS_URL: &str = "https://www.reddit.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed_url: String,
    pub limit: Option<u32>,
    pub timeout: Duration,
    pub user_agent: String,
    pub comments_url: String,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> TedditResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, so tests don't touch the process environment
    pub fn from_vars<F>(lookup: F) -> TedditResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let feed_url = lookup("TEDDIT_FEED_URL").unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

        let limit = lookup("TEDDIT_LIMIT")
            .map(|v| parse_number::<u32>("TEDDIT_LIMIT", &v))
            .transpose()?;

        let timeout_secs = lookup("TEDDIT_TIMEOUT_SECS")
            .map(|v| parse_number::<u64>("TEDDIT_TIMEOUT_SECS", &v))
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let user_agent = lookup("TEDDIT_USER_AGENT")
            .unwrap_or_else(|| format!("teddit/{}", env!("CARGO_PKG_VERSION")));

        let comments_url = lookup("TEDDIT_COMMENTS_URL")
            .unwrap_or_else(|| DEFAULT_COMMENTS_URL.to_string());

        Ok(Self {
            feed_url,
            limit,
            timeout: Duration::from_secs(timeout_secs),
            user_agent,
            comments_url,
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> TedditResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| TedditError::Config(format!("{} must be a non-negative integer, got {:?}", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> TedditResult<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.limit, None);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.user_agent.starts_with("teddit/"));
        assert_eq!(config.comments_url, DEFAULT_COMMENTS_URL);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("TEDDIT_FEED_URL", "https://www.reddit.com/r/rust/hot.json"),
            ("TEDDIT_LIMIT", "2"),
            ("TEDDIT_TIMEOUT_SECS", " 5 "),
            ("TEDDIT_USER_AGENT", "my-agent"),
            ("TEDDIT_COMMENTS_URL", "https://old.reddit.com"),
        ])
        .unwrap();

        assert_eq!(config.feed_url, "https://www.reddit.com/r/rust/hot.json");
        assert_eq!(config.limit, Some(2));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "my-agent");
        assert_eq!(config.comments_url, "https://old.reddit.com");
    }

    #[test]
    fn test_invalid_limit_is_config_error() {
        let err = config_from(&[("TEDDIT_LIMIT", "lots")]).unwrap_err();
        assert!(matches!(err, TedditError::Config(_)));

        let err = config_from(&[("TEDDIT_LIMIT", "-1")]).unwrap_err();
        assert!(matches!(err, TedditError::Config(_)));
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let err = config_from(&[("TEDDIT_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("TEDDIT_TIMEOUT_SECS"));
    }
}
