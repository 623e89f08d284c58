//! Run summary and its console rendering
//!
//! The coordinator records every submission outcome into a `CrawlSummary`;
//! the binary prints it once the run is done.

use crate::state::SubmissionOutcome;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// What a crawl run accomplished
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    /// Handle whose solutions were crawled
    pub username: String,

    pub started_at: DateTime<Utc>,

    pub finished_at: Option<DateTime<Utc>>,

    /// Unique accepted submissions returned by the list step
    pub submissions_found: usize,

    /// Files written, in processing order
    pub saved: Vec<PathBuf>,

    /// Skipped submissions per outcome label
    pub skipped: BTreeMap<&'static str, usize>,
}

impl CrawlSummary {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            started_at: Utc::now(),
            finished_at: None,
            submissions_found: 0,
            saved: Vec::new(),
            skipped: BTreeMap::new(),
        }
    }

    /// Records the outcome of one submission
    pub fn record(&mut self, outcome: SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Saved { path } => self.saved.push(path),
            other => *self.skipped.entry(other.label()).or_insert(0) += 1,
        }
    }

    /// Marks the run as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn succeeded(&self) -> usize {
        self.saved.len()
    }

    pub fn failed(&self) -> usize {
        self.skipped.values().sum()
    }

    /// Number of skips recorded under `label` (see [`SubmissionOutcome::label`])
    pub fn skipped_with(&self, label: &str) -> usize {
        self.skipped.get(label).copied().unwrap_or(0)
    }

    /// Wall-clock duration of the run, once finished
    pub fn duration(&self) -> Option<Duration> {
        self.finished_at
            .and_then(|finished| (finished - self.started_at).to_std().ok())
    }
}

/// Prints the summary to stdout in a formatted manner
pub fn print_summary(summary: &CrawlSummary) {
    println!("=== Crawl Summary for {} ===\n", summary.username);

    println!("  Unique accepted submissions: {}", summary.submissions_found);
    println!("  Solutions saved: {}", summary.succeeded());
    println!("  Skipped: {}", summary.failed());

    for (label, count) in &summary.skipped {
        println!("    {}: {}", label, count);
    }

    if let Some(first) = summary.saved.first() {
        if let Some(dir) = first.parent() {
            println!("\n  Output directory: {}", dir.display());
        }
    }
    println!();
}

/// Formats an elapsed duration as hours, minutes, seconds and milliseconds
///
/// ```
/// use std::time::Duration;
/// use cf_crawler::output::format_elapsed;
///
/// assert_eq!(
///     format_elapsed(Duration::from_millis(3_723_004)),
///     "1 hours, 2 minutes, 3 seconds, 4 milliseconds"
/// );
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!(
        "{} hours, {} minutes, {} seconds, {} milliseconds",
        hours, minutes, seconds, millis
    )
}
