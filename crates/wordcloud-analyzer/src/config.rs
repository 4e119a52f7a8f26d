use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Service configuration parsed from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub port: u16,
    pub cache_dir: PathBuf,
    pub cache_expiration_hours: u32,
    pub wiki_api_url: String,
    pub wiki_api_limit: u32,
    pub max_words: usize,
    pub min_word_length: usize,
    pub fetch_concurrency: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            cache_dir: PathBuf::from("./cache"),
            cache_expiration_hours: 24,
            wiki_api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            wiki_api_limit: 500,
            max_words: 50,
            min_word_length: 3,
            fetch_concurrency: 4,
        }
    }
}

impl AnalyzerConfig {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Parse configuration from any variable source. Missing or unparseable
    /// values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            port: parse_var(&lookup, "PORT").unwrap_or(defaults.port),
            cache_dir: lookup("CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_dir),
            cache_expiration_hours: parse_var(&lookup, "CACHE_EXPIRATION_HOURS")
                .unwrap_or(defaults.cache_expiration_hours),
            wiki_api_url: lookup("WIKI_API_URL").unwrap_or(defaults.wiki_api_url),
            wiki_api_limit: parse_var(&lookup, "WIKI_API_LIMIT").unwrap_or(defaults.wiki_api_limit),
            max_words: parse_var(&lookup, "MAX_WORDS").unwrap_or(defaults.max_words),
            min_word_length: parse_var(&lookup, "MIN_WORD_LENGTH").unwrap_or(defaults.min_word_length),
            fetch_concurrency: parse_var(&lookup, "FETCH_CONCURRENCY")
                .filter(|n: &usize| *n > 0)
                .unwrap_or(defaults.fetch_concurrency),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    lookup(name).and_then(|v| v.trim().parse().ok())
}
