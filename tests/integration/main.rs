//! Integration tests for the crawl pipeline
//!
//! These tests use wiremock to stand in for the judge's API and submission
//! pages and check what ends up on disk.

mod common;
mod crawl_tests;
