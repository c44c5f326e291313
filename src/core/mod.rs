//! Core types for gotemplater
//!
//! This module holds the error types shared by every stage of the render
//! pipeline.
//!
//! ## `error`
//!
//! - [`TemplaterError`] - Enumerated failure modes (usage, decode, template, I/O)
//! - [`ErrorContext`] - Printable wrapper with details and a suggestion
//! - [`user_friendly_error`] - Convert any `anyhow::Error` into an [`ErrorContext`]
//!
//! ## `file_error`
//!
//! - [`FileOperationError`] - An I/O failure annotated with the path and purpose
//! - [`FileResultExt`] - `with_file_context` for `io::Result`
//!
//! # Example
//!
//! ```rust
//! use gotemplater::core::{user_friendly_error, TemplaterError};
//! use anyhow::Result;
//!
//! fn parse_format(value: &str) -> Result<()> {
//!     Err(TemplaterError::UnsupportedFormat {
//!         format: value.to_string(),
//!     }
//!     .into())
//! }
//!
//! if let Err(e) = parse_format("toml") {
//!     let friendly = user_friendly_error(e);
//!     assert!(friendly.suggestion.is_some());
//! }
//! ```

pub mod error;
pub mod file_error;

pub use error::{ErrorContext, TemplaterError, user_friendly_error};
pub use file_error::{FileOperation, FileOperationError, FileResultExt};
