//! State module for tracking crawl progress
//!
//! Every submission selected for download ends the run in exactly one
//! `SubmissionOutcome`; the outcomes feed the run summary.

mod outcome;

pub use outcome::SubmissionOutcome;
