// src/config.rs
// =============================================================================
// Crawl configuration: defaults, validation, and the exploration budget.
//
// The CLI (src/cli.rs) collects raw flag values into a CrawlConfig. Before any
// request is made we validate it once, then derive the immutable pieces the
// crawler needs:
// - ExplorationBudget: K (max results per query), D (max depth), pacing delay
// - DeepPrefixRegistry: prefixes exempt from the depth limit
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::crawl::DeepPrefixRegistry;

/// Maximum number of suggestions the endpoint returns for one prefix.
pub const DEFAULT_MAX_RESULTS: usize = 8;

/// Depth limit for prefixes outside the deep prefix registry.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Pause before every request, to be respectful to the API.
pub const DEFAULT_DELAY_MS: u64 = 100;

/// Per-request timeout for the HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the sorted suggestion list is written.
pub const DEFAULT_OUTPUT_PATH: &str = "./data/suggestions.json";

/// Stems of high-value medical terms (Dutch) that get unlimited depth.
pub const DEFAULT_DEEP_PREFIXES: &[&str] = &[
    "fys",      // fysiotherapie
    "ziek",     // ziekte, ziekenhuis
    "voet",     // foot
    "hulp",     // help
    "tand",     // tooth/dental
    "oog",      // eye
    "operatie", // operation
    "mond",     // mouth
    "huid",     // skin
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL is required (pass --base-url or set BASE_URL)")]
    MissingBaseUrl,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("max results per query must be at least 1")]
    ZeroMaxResults,

    #[error("invalid deep prefix '{0}': only letters a-z are allowed")]
    InvalidDeepPrefix(String),

    #[error("checkpoint interval must be at least 1")]
    ZeroCheckpointInterval,
}

/// How far and how fast one crawl run may go. Immutable for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorationBudget {
    pub max_results: usize,
    pub max_depth: usize,
    pub delay: Duration,
}

impl Default for ExplorationBudget {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            max_depth: DEFAULT_MAX_DEPTH,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}

/// Everything needed to run one crawl, as collected from the command line.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub base_url: String,
    pub output: PathBuf,
    pub max_results: usize,
    pub max_depth: usize,
    pub delay_ms: u64,
    pub deep_prefixes: Vec<String>,
    pub retries: u32,
    pub timeout_secs: u64,
    pub checkpoint_every: Option<usize>,
}

impl CrawlConfig {
    /// A config with every default filled in, pointed at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_results: DEFAULT_MAX_RESULTS,
            max_depth: DEFAULT_MAX_DEPTH,
            delay_ms: DEFAULT_DELAY_MS,
            deep_prefixes: DEFAULT_DEEP_PREFIXES.iter().map(|s| s.to_string()).collect(),
            retries: 0,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            checkpoint_every: None,
        }
    }

    /// Checks the config before any request is made.
    ///
    /// The base URL is only checked for shape here; the prefix is appended
    /// to it verbatim at request time, so it usually ends in `?q=` or `/`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base_url.trim();
        if base.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        let parsed = Url::parse(base).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::InvalidBaseUrl {
                url: base.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if self.max_results == 0 {
            return Err(ConfigError::ZeroMaxResults);
        }

        for token in &self.deep_prefixes {
            let lower = token.to_lowercase();
            if lower.is_empty() || !lower.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(ConfigError::InvalidDeepPrefix(token.clone()));
            }
        }

        if self.checkpoint_every == Some(0) {
            return Err(ConfigError::ZeroCheckpointInterval);
        }

        Ok(())
    }

    pub fn budget(&self) -> ExplorationBudget {
        ExplorationBudget {
            max_results: self.max_results,
            max_depth: self.max_depth,
            delay: Duration::from_millis(self.delay_ms),
        }
    }

    pub fn registry(&self) -> DeepPrefixRegistry {
        DeepPrefixRegistry::new(self.deep_prefixes.iter().map(String::as_str))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CrawlConfig::with_base_url("https://api.example.com/suggest?q=");
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.budget(), ExplorationBudget::default());
        assert_eq!(config.deep_prefixes.len(), 9);
    }

    #[test]
    fn test_missing_base_url() {
        let config = CrawlConfig::with_base_url("   ");
        assert_eq!(config.validate(), Err(ConfigError::MissingBaseUrl));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = CrawlConfig::with_base_url("ftp://example.com/");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_garbage_url() {
        let config = CrawlConfig::with_base_url("not a url");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_max_results() {
        let mut config = CrawlConfig::with_base_url("https://example.com/?q=");
        config.max_results = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaxResults));
    }

    #[test]
    fn test_rejects_bad_deep_prefix() {
        let mut config = CrawlConfig::with_base_url("https://example.com/?q=");
        config.deep_prefixes = vec!["tand".into(), "x1".into()];
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDeepPrefix("x1".into()))
        );

        config.deep_prefixes = vec!["TAND".into()];
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_checkpoint_interval() {
        let mut config = CrawlConfig::with_base_url("https://example.com/?q=");
        config.checkpoint_every = Some(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroCheckpointInterval));
    }
}
