//! Integration test suite for gotemplater
//!
//! These tests drive the compiled binary end to end: they lay out data,
//! content and template files in a temporary directory, run `gotemplater`,
//! and check stdout, stderr, the exit status and the files left behind.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli_args**: help, version, unknown flags, format validation, stdin conflict
//! - **content**: the `-c` content variable from files and stdin
//! - **data_formats**: JSON and YAML decoding, stdin data, decode failures
//! - **named_templates**: `-e`, cross-file template calls, parse errors
//! - **output**: `-o` versus stdout, and failed runs leaving files untouched

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod cli_args;
mod data_formats;
mod named_templates;
mod output;
