//! Domain values produced by the submission list and consumed by the writer
//!
//! - `Submission`: one accepted submission selected for download
//! - `ProblemKey`: contest id + problem index, the deduplication key
//! - `language`: ordered language → file extension table

pub mod language;
mod submission;

pub use language::file_extension;
pub use submission::{ProblemKey, Submission};
