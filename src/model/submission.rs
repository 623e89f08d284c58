use chrono::{DateTime, Utc};
use std::fmt;

/// Identifies a problem across the whole judge, e.g. `1325A`
///
/// Built from the contest id followed by the in-contest problem index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemKey(String);

impl ProblemKey {
    pub fn new(contest_id: u64, index: &str) -> Self {
        Self(format!("{}{}", contest_id, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProblemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An accepted submission selected for download
///
/// Immutable once built; one exists per distinct problem in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    submission_id: u64,
    contest_id: u64,
    problem_key: ProblemKey,
    language: String,
    problem_name: Option<String>,
    submitted_at: Option<DateTime<Utc>>,
}

impl Submission {
    /// Creates a submission, deriving its problem key from `contest_id` and `problem_index`
    pub fn new(
        submission_id: u64,
        contest_id: u64,
        problem_index: &str,
        language: impl Into<String>,
    ) -> Self {
        Self {
            submission_id,
            contest_id,
            problem_key: ProblemKey::new(contest_id, problem_index),
            language: language.into(),
            problem_name: None,
            submitted_at: None,
        }
    }

    pub fn with_problem_name(mut self, name: impl Into<String>) -> Self {
        self.problem_name = Some(name.into());
        self
    }

    pub fn with_submitted_at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.submitted_at = Some(submitted_at);
        self
    }

    pub fn submission_id(&self) -> u64 {
        self.submission_id
    }

    pub fn contest_id(&self) -> u64 {
        self.contest_id
    }

    pub fn problem_key(&self) -> &ProblemKey {
        &self.problem_key
    }

    /// Language as reported by the judge, e.g. `GNU C++17 (64)`
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn problem_name(&self) -> Option<&str> {
        self.problem_name.as_deref()
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }
}
