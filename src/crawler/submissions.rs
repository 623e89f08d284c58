//! Submission list retrieval
//!
//! Fetches a user's submission history from the `user.status` API method and
//! reduces it to one accepted submission per problem, in API order.

use crate::crawler::fetcher::{FetchError, PageFetcher};
use crate::model::{ProblemKey, Submission};
use crate::url::Endpoints;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Verdict the judge reports for an accepted submission
pub const VERDICT_OK: &str = "OK";

/// Envelope status of a successful API call
const API_STATUS_OK: &str = "OK";

/// Errors that empty the submission list for a run
#[derive(Debug, Error)]
pub enum ListError {
    #[error("Failed to fetch submission list: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to build submission list URL: {0}")]
    Url(#[from] ::url::ParseError),

    #[error("Malformed submission list response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API returned status '{status}': {comment}")]
    Api { status: String, comment: String },

    #[error("API response has no result array")]
    MissingResult,
}

/// Top-level envelope of every API response
#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    result: Option<Vec<ApiSubmission>>,
}

/// One entry of the `user.status` result array
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSubmission {
    pub id: u64,
    #[serde(default)]
    pub contest_id: Option<u64>,
    pub problem: ApiProblem,
    pub programming_language: String,
    /// Absent while the submission is still being judged
    #[serde(default)]
    pub verdict: Option<String>,
    #[serde(default)]
    pub creation_time_seconds: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiProblem {
    pub index: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl ApiSubmission {
    pub fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some(VERDICT_OK)
    }

    fn into_submission(self, contest_id: u64) -> Submission {
        let mut submission = Submission::new(
            self.id,
            contest_id,
            &self.problem.index,
            self.programming_language,
        );
        if let Some(name) = self.problem.name {
            submission = submission.with_problem_name(name);
        }
        if let Some(at) = self
            .creation_time_seconds
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        {
            submission = submission.with_submitted_at(at);
        }
        submission
    }
}

/// Keeps the first accepted entry of every problem, preserving input order
///
/// Entries with any verdict other than `OK` are dropped. Accepted entries
/// without a contest id cannot be addressed by a submission URL and are
/// skipped without claiming their problem.
pub fn select_accepted<I>(entries: I) -> Vec<Submission>
where
    I: IntoIterator<Item = ApiSubmission>,
{
    let mut seen: HashSet<ProblemKey> = HashSet::new();
    let mut selected = Vec::new();

    for entry in entries {
        if !entry.is_accepted() {
            continue;
        }

        let Some(contest_id) = entry.contest_id else {
            tracing::debug!(
                "Skipping accepted submission {} without a contest id",
                entry.id
            );
            continue;
        };

        let key = ProblemKey::new(contest_id, &entry.problem.index);
        if !seen.insert(key) {
            continue;
        }

        selected.push(entry.into_submission(contest_id));
    }

    selected
}

/// Parses a `user.status` response body into the deduplicated accepted list
pub fn parse_submission_list(body: &str) -> Result<Vec<Submission>, ListError> {
    let response: ApiResponse = serde_json::from_str(body)?;

    if response.status != API_STATUS_OK {
        return Err(ListError::Api {
            status: response.status,
            comment: response.comment.unwrap_or_default(),
        });
    }

    let entries = response.result.ok_or(ListError::MissingResult)?;
    Ok(select_accepted(entries))
}

/// Fetches and parses the submission list of `handle`
pub async fn try_fetch_submission_list(
    fetcher: &PageFetcher,
    endpoints: &Endpoints,
    handle: &str,
) -> Result<Vec<Submission>, ListError> {
    let url = endpoints.submission_list_url(handle)?;
    let body = fetcher.fetch(url.as_str()).await?;
    parse_submission_list(&body)
}

/// Returns the unique accepted submissions of `handle`
///
/// Never fails: any fetch or parse error is logged and yields an empty list,
/// which ends the run gracefully.
pub async fn fetch_submission_list(
    fetcher: &PageFetcher,
    endpoints: &Endpoints,
    handle: &str,
) -> Vec<Submission> {
    match try_fetch_submission_list(fetcher, endpoints, handle).await {
        Ok(submissions) => {
            tracing::info!(
                "User {} has {} unique accepted submissions",
                handle,
                submissions.len()
            );
            submissions
        }
        Err(e) => {
            tracing::error!("Failed to get submission list of {}: {}", handle, e);
            Vec::new()
        }
    }
}
