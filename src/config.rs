//! Environment-driven application configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `FAQ_FILE_PATH` | `faqs.jsonl` |
//! | `FAQ_ANALYTICS_PATH` | `analytics.jsonl` |
//! | `FAQ_LOAD_TIMEOUT_MS` | `5000` |
//! | `FAQ_MATCH_LIMIT` | `5` |
//! | `FAQ_CONFIDENCE_THRESHOLD` | `0.3` |
//! | `FAQ_HTTP_ADDR` | `127.0.0.1:3030` |
//! | `FAQ_LLM_ENDPOINT` | unset (no LLM fallback) |
//! | `FAQ_LLM_MODEL` | `gpt-4o-mini` |
//! | `FAQ_LLM_API_KEY` | unset |
//!
//! Relative paths are resolved against the current directory.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::chatbot::DEFAULT_CONFIDENCE_THRESHOLD;
use crate::error::{FaqError, Result};
use crate::matcher::{MatcherConfig, DEFAULT_LOAD_TIMEOUT, DEFAULT_MATCH_LIMIT};

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3030";
const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// LLM fallback endpoint settings
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

/// Application configuration for the server binary
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub faq_file_path: PathBuf,
    pub analytics_path: PathBuf,
    pub load_timeout: Duration,
    pub match_limit: usize,
    pub confidence_threshold: f64,
    pub http_addr: String,
    pub llm: Option<LlmConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            faq_file_path: current_dir.join("faqs.jsonl"),
            analytics_path: current_dir.join("analytics.jsonl"),
            load_timeout: DEFAULT_LOAD_TIMEOUT,
            match_limit: DEFAULT_MATCH_LIMIT,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            llm: None,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        let faq_file_path = lookup("FAQ_FILE_PATH")
            .map(|p| resolve_path(&current_dir, &p))
            .unwrap_or(defaults.faq_file_path);
        let analytics_path = lookup("FAQ_ANALYTICS_PATH")
            .map(|p| resolve_path(&current_dir, &p))
            .unwrap_or(defaults.analytics_path);

        let load_timeout = parse_var::<u64, _>(&lookup, "FAQ_LOAD_TIMEOUT_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.load_timeout);
        let match_limit =
            parse_var::<usize, _>(&lookup, "FAQ_MATCH_LIMIT")?.unwrap_or(defaults.match_limit);
        let confidence_threshold = parse_var::<f64, _>(&lookup, "FAQ_CONFIDENCE_THRESHOLD")?
            .unwrap_or(defaults.confidence_threshold);
        let http_addr = lookup("FAQ_HTTP_ADDR").unwrap_or(defaults.http_addr);

        let llm = lookup("FAQ_LLM_ENDPOINT")
            .filter(|endpoint| !endpoint.trim().is_empty())
            .map(|endpoint| LlmConfig {
                endpoint,
                model: lookup("FAQ_LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
                api_key: lookup("FAQ_LLM_API_KEY").filter(|k| !k.is_empty()),
            });

        Ok(Self {
            faq_file_path,
            analytics_path,
            load_timeout,
            match_limit,
            confidence_threshold,
            http_addr,
            llm,
        })
    }

    /// Matcher settings derived from this configuration
    pub fn matcher_config(&self) -> MatcherConfig {
        MatcherConfig::default()
            .with_load_timeout(self.load_timeout)
            .with_default_limit(self.match_limit)
    }
}

fn resolve_path(current_dir: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        current_dir.join(path)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| FaqError::Config(format!("{key}={raw}: {e}"))),
    }
}
