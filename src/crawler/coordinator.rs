//! Crawler coordinator - main crawl orchestration logic
//!
//! A run moves through `Start → ListFetched → per-submission loop → Done`.
//! Each submission goes fetch → extract → write; a failure at any step is
//! recorded as that submission's outcome and the loop moves on.

use crate::config::{resolve_solutions_dir, validate, Config};
use crate::crawler::extractor::extract_source;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::submissions::fetch_submission_list;
use crate::model::Submission;
use crate::output::{CrawlSummary, SolutionWriter};
use crate::state::SubmissionOutcome;
use crate::url::Endpoints;
use crate::CrawlError;

/// Main crawler coordinator structure
///
/// Owns the run's fetcher (and through it the rate limiter) and writer.
pub struct Coordinator {
    endpoints: Endpoints,
    fetcher: PageFetcher,
    writer: SolutionWriter,
}

impl Coordinator {
    /// Creates a coordinator from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(CrawlError)` - Invalid configuration, HTTP client or output directory
    pub fn new(config: &Config) -> Result<Self, CrawlError> {
        validate(config)?;

        let endpoints = Endpoints::new(&config.remote.base_url)?;
        let fetcher = PageFetcher::from_config(config)?;
        let writer = SolutionWriter::new(resolve_solutions_dir(&config.output)?);

        tracing::debug!(
            "Coordinator ready: base {}, output {}",
            endpoints.base(),
            writer.base_dir().display()
        );

        Ok(Self::from_parts(endpoints, fetcher, writer))
    }

    /// Assembles a coordinator from already-built components
    pub fn from_parts(endpoints: Endpoints, fetcher: PageFetcher, writer: SolutionWriter) -> Self {
        Self {
            endpoints,
            fetcher,
            writer,
        }
    }

    pub fn writer(&self) -> &SolutionWriter {
        &self.writer
    }

    /// Runs the crawl for `username`
    ///
    /// Never fails: an unavailable submission list yields an empty run and
    /// per-submission failures are recorded in the returned summary.
    pub async fn run(&self, username: &str) -> CrawlSummary {
        let mut summary = CrawlSummary::new(username);
        tracing::info!("Starting crawl for {}", username);

        let submissions = fetch_submission_list(&self.fetcher, &self.endpoints, username).await;
        summary.submissions_found = submissions.len();

        let total = submissions.len();
        for (index, submission) in submissions.iter().enumerate() {
            tracing::info!(
                "[{}/{}] Fetching solution for problem {}{}",
                index + 1,
                total,
                submission.problem_key(),
                submission
                    .problem_name()
                    .map(|name| format!(" ({})", name))
                    .unwrap_or_default()
            );

            let outcome = self.process_submission(username, submission).await;
            match &outcome {
                SubmissionOutcome::Saved { path } => {
                    tracing::info!("Wrote {}", path.display());
                }
                other => {
                    tracing::warn!(
                        "Skipping problem {}: {}",
                        submission.problem_key(),
                        other
                    );
                }
            }
            summary.record(outcome);
        }

        summary.finish();
        tracing::info!(
            "Crawl for {} done: {} of {} solutions saved",
            username,
            summary.succeeded(),
            total
        );

        summary
    }

    /// Fetches, extracts and writes a single submission
    async fn process_submission(&self, username: &str, submission: &Submission) -> SubmissionOutcome {
        let url = match self
            .endpoints
            .submission_page_url(submission.contest_id(), submission.submission_id())
        {
            Ok(url) => url,
            Err(e) => {
                return SubmissionOutcome::Unreachable {
                    reason: e.to_string(),
                }
            }
        };

        if let Some(at) = submission.submitted_at() {
            tracing::debug!(
                "Submission {} ({}) submitted at {}",
                submission.submission_id(),
                submission.language(),
                at
            );
        }

        let page = match self.fetcher.fetch(url.as_str()).await {
            Ok(page) => page,
            Err(e) => {
                return SubmissionOutcome::Unreachable {
                    reason: e.to_string(),
                }
            }
        };

        let source = match extract_source(&page) {
            Ok(source) => source,
            Err(e) => {
                return SubmissionOutcome::NotPublic {
                    reason: e.to_string(),
                }
            }
        };

        match self.writer.write(
            username,
            submission.problem_key(),
            submission.language(),
            &source,
        ) {
            Ok(path) => SubmissionOutcome::Saved { path },
            Err(e) => SubmissionOutcome::WriteFailed {
                reason: e.to_string(),
            },
        }
    }
}

/// Runs a complete crawl for `username`
///
/// # Example
///
/// ```no_run
/// use cf_crawler::config::Config;
/// use cf_crawler::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = run_crawl(&Config::default(), "tourist").await?;
/// println!("saved {} solutions", summary.succeeded());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config, username: &str) -> Result<CrawlSummary, CrawlError> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run(username).await)
}
