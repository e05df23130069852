//! Integration tests for pdf-digest
//!
//! These tests use wiremock to serve generated PDFs and run full batches
//! against a temporary SQLite store.

mod pipeline_tests;
mod support;
