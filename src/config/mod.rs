//! Configuration module for cf-crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so running without a file is the common case.
//!
//! # Example
//!
//! ```no_run
//! use cf_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("cf-crawler.toml")).unwrap();
//! println!("Rate limit: {} req/s", config.crawler.requests_per_second);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, RemoteConfig, UserAgentConfig, DEFAULT_BASE_URL,
    DEFAULT_SOLUTIONS_DIR_NAME, MAX_REQUESTS_PER_SECOND,
};

// Re-export parser functions
pub use parser::{load_config, parse_config, resolve_solutions_dir};
pub use validation::validate;
