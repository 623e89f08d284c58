//! Output module for persisting solutions and reporting runs
//!
//! This module handles:
//! - Writing extracted sources to the on-disk layout
//! - Summarising what a run accomplished

pub mod stats;
mod writer;

pub use stats::{format_elapsed, print_summary, CrawlSummary};
pub use writer::{normalize_line_endings, SolutionWriter, WriteError};
