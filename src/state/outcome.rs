/// Outcome definitions for submissions processed during a crawl
use std::fmt;
use std::path::PathBuf;

/// How processing of a single submission ended
///
/// Only `Saved` is a success. The other variants are recoverable skips:
/// the crawl moves on to the next submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Source was extracted and written to `path`
    Saved { path: PathBuf },

    /// The submission page could not be fetched (transport error or non-2xx)
    Unreachable { reason: String },

    /// The page was fetched but carries no source (private or removed)
    NotPublic { reason: String },

    /// The source could not be written to disk
    WriteFailed { reason: String },
}

impl SubmissionOutcome {
    /// Returns true if the solution was written to disk
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }

    /// Returns the written path for successful outcomes
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Saved { path } => Some(path),
            _ => None,
        }
    }

    /// Short stable label used in logs and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::Saved { .. } => "saved",
            Self::Unreachable { .. } => "unreachable",
            Self::NotPublic { .. } => "not_public",
            Self::WriteFailed { .. } => "write_failed",
        }
    }
}

impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved { path } => write!(f, "saved to {}", path.display()),
            Self::Unreachable { reason }
            | Self::NotPublic { reason }
            | Self::WriteFailed { reason } => write!(f, "{}: {}", self.label(), reason),
        }
    }
}
