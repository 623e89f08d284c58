//! cf-crawler: downloads a Codeforces user's accepted solutions
//!
//! This crate enumerates a user's submission history through the Codeforces API,
//! keeps one accepted submission per problem, fetches each submission page at a
//! polite rate, extracts the source code and writes it to disk.

pub mod config;
pub mod crawler;
pub mod model;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for cf-crawler operations
///
/// Per-submission failures never surface here; they are recorded as
/// [`state::SubmissionOutcome`]s. This type covers start-up problems and
/// the individual component errors when callers use the components directly.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error(transparent)]
    Fetch(#[from] crawler::FetchError),

    #[error("Submission list error: {0}")]
    List(#[from] crawler::ListError),

    #[error(transparent)]
    Extract(#[from] crawler::ExtractError),

    #[error(transparent)]
    Write(#[from] output::WriteError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Could not determine the home directory; set output.solutions-dir")]
    NoHomeDir,
}

/// Result type alias for cf-crawler operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for endpoint construction
pub type UrlResult<T> = std::result::Result<T, ::url::ParseError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_crawl, Coordinator};
pub use model::{ProblemKey, Submission};
pub use output::CrawlSummary;
pub use state::SubmissionOutcome;
