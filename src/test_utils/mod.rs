//! Test utilities for gotemplater
//!
//! This module provides helpers shared by the unit tests and the integration
//! tests: a temporary workspace for data, content and template files, and a
//! one-time logging setup.
//!
//! # Example
//!
//! ```rust,no_run
//! use gotemplater::test_utils::TestWorkspace;
//!
//! let workspace = TestWorkspace::new().unwrap();
//! let data = workspace.write("data.json", r#"{"Name": "Ada"}"#).unwrap();
//! let template = workspace.write("hello.txt", "Hello {{.Name}}").unwrap();
//! assert!(workspace.exists("hello.txt"));
//! # let _ = (data, template);
//! ```

pub mod workspace;

pub use workspace::TestWorkspace;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` when given, otherwise the
/// `RUST_LOG` environment variable; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
