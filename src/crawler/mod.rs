//! Crawler module for downloading accepted solutions
//!
//! This module contains the crawl pipeline, including:
//! - Request rate limiting
//! - Rate-limited HTTP fetching
//! - Submission list retrieval and deduplication
//! - Source extraction from submission pages
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod rate_limiter;
mod submissions;

pub use coordinator::{run_crawl, Coordinator};
pub use extractor::{extract_source, ExtractError, SOURCE_SELECTOR};
pub use fetcher::{build_http_client, FetchError, PageFetcher};
pub use rate_limiter::RateLimiter;
pub use submissions::{
    fetch_submission_list, parse_submission_list, select_accepted, try_fetch_submission_list,
    ApiProblem, ApiSubmission, ListError, VERDICT_OK,
};
