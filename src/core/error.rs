//! Error handling for gotemplater
//!
//! Every failure in the render pipeline is fatal, so the error types here are
//! about reporting rather than recovery. Library code returns
//! [`anyhow::Result`] with [`TemplaterError`] (or a
//! [`FileOperationError`](crate::core::file_error::FileOperationError)) at the
//! root of the chain; `main` converts whatever comes back through
//! [`user_friendly_error`] and prints it with [`ErrorContext::display`].
//!
//! # Error Categories
//!
//! - **Usage**: [`TemplaterError::UnrecognizedFlag`],
//!   [`TemplaterError::UnsupportedFormat`], [`TemplaterError::StdinConflict`]
//! - **Decode**: [`TemplaterError::DataDecode`], [`TemplaterError::DataNotMapping`]
//! - **Template**: [`TemplaterError::TemplateParse`],
//!   [`TemplaterError::TemplateExecute`], [`TemplaterError::TemplateNotFound`]
//! - **I/O**: [`TemplaterError::IoError`] and file operation errors
//!
//! # Example
//!
//! ```rust,no_run
//! use gotemplater::core::error::{user_friendly_error, TemplaterError};
//!
//! let err = anyhow::Error::new(TemplaterError::UnrecognizedFlag {
//!     flag: "--bogus".to_string(),
//! });
//! user_friendly_error(err).display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::core::file_error::FileOperationError;

/// The failure modes of a gotemplater run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplaterError {
    /// A token starting with `-` that is not one of the known flags.
    #[error("Unrecognized flag \"{flag}\"")]
    UnrecognizedFlag {
        /// The offending token as given on the command line
        flag: String,
    },

    /// The `--format` value is neither `json` nor `yaml`.
    #[error("The data format \"{format}\" is invalid or not supported, use \"json\" or \"yaml\"")]
    UnsupportedFormat {
        /// The value after case folding
        format: String,
    },

    /// Both the data and the content were asked to come from standard input.
    #[error("Standard input can only be read once, but both {first} and {second} want it")]
    StdinConflict {
        first: String,
        second: String,
    },

    /// The data could not be decoded in the selected format.
    #[error("Failed to decode {format} data from {source_name}")]
    DataDecode {
        format: String,
        source_name: String,
        reason: String,
    },

    /// The data decoded fine but is not a mapping at the top level.
    #[error("Data from {source_name} must be a mapping at the top level, found {found}")]
    DataNotMapping {
        source_name: String,
        found: String,
    },

    /// A template file failed to parse.
    #[error("Failed to parse template {file}")]
    TemplateParse {
        file: String,
        reason: String,
    },

    /// Executing a template failed.
    #[error("Failed to execute template {name}")]
    TemplateExecute {
        name: String,
        reason: String,
    },

    /// `--execute` named a template that none of the files define.
    #[error("Template \"{name}\" is not defined in the given template files")]
    TemplateNotFound {
        name: String,
        /// Closest known template names, best match first
        suggestions: Vec<String>,
    },

    #[error("IO error: {0}")]
    IoError(String),

    #[error("{message}")]
    Other {
        message: String,
    },
}

impl From<std::io::Error> for TemplaterError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error.to_string())
    }
}

/// An error paired with the extra lines shown to the user.
#[derive(Debug)]
pub struct ErrorContext {
    pub error: TemplaterError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: TemplaterError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colored labels.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error coming out of the pipeline into something printable.
///
/// Known error types get a tailored suggestion; everything else keeps its
/// full `Caused by` chain so nothing from the underlying library is lost.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(templater_error) = error.downcast_ref::<TemplaterError>() {
        return create_error_context(templater_error.clone());
    }

    if let Some(file_error) = error.downcast_ref::<FileOperationError>() {
        let ctx = ErrorContext::new(TemplaterError::Other {
            message: file_error.user_message(),
        });
        return match file_error.source.kind() {
            std::io::ErrorKind::NotFound => {
                ctx.with_suggestion("Check that the path is spelled correctly and the file exists")
            }
            std::io::ErrorKind::PermissionDenied => {
                ctx.with_suggestion("Check the file permissions with 'ls -la'")
            }
            _ => ctx,
        };
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(TemplaterError::IoError(io_error.to_string()))
                    .with_suggestion("Check the file permissions with 'ls -la'");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(TemplaterError::IoError(io_error.to_string()))
                    .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    ErrorContext::new(TemplaterError::Other {
        message: with_error_chain(&error),
    })
}

/// Render an error followed by its numbered `Caused by` chain.
fn with_error_chain(error: &anyhow::Error) -> String {
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    message
}

fn create_error_context(error: TemplaterError) -> ErrorContext {
    match &error {
        TemplaterError::UnrecognizedFlag { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Run 'gotemplater --help' to see the supported flags"),

        TemplaterError::UnsupportedFormat { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Pass '-f json' or '-f yaml'"),

        TemplaterError::StdinConflict { .. } => ErrorContext::new(error.clone())
            .with_suggestion("Pass the data with '-d <file>' when using '-c -', or the content with '-c <file>'"),

        TemplaterError::DataDecode { format, reason, .. } => ErrorContext::new(error.clone())
            .with_details(reason.clone())
            .with_suggestion(format!("Check that the data is valid {format}, or pick the right format with '-f'")),

        TemplaterError::DataNotMapping { .. } => ErrorContext::new(error.clone())
            .with_details("Templates address the data by key, so the top level has to be an object/mapping")
            .with_suggestion("Wrap the value in an object, e.g. {\"items\": [...]}"),

        TemplaterError::TemplateParse { reason, .. } => ErrorContext::new(error.clone())
            .with_details(reason.clone())
            .with_suggestion("Check the template syntax: actions use {{ }}, and every {{define}}, {{if}}, {{range}} and {{with}} needs an {{end}}"),

        TemplaterError::TemplateExecute { reason, .. } => ErrorContext::new(error.clone())
            .with_details(reason.clone()),

        TemplaterError::TemplateNotFound { suggestions, .. } => {
            let ctx = ErrorContext::new(error.clone())
                .with_details("Names come from {{define \"name\"}} and {{block \"name\"}} actions and from the template file names");
            match suggestions.first() {
                Some(best) => ctx.with_suggestion(format!("Did you mean \"{best}\"?")),
                None => ctx,
            }
        }

        _ => ErrorContext::new(error.clone()),
    }
}
