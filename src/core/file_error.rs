//! Structured file system errors
//!
//! Captures what was being read or written, and why, at the operation site
//! instead of reconstructing it later from an `io::Error` message.

use std::path::PathBuf;
use thiserror::Error;

/// Types of file operations
#[derive(Debug, Clone, PartialEq)]
pub enum FileOperation {
    /// Reading a file completely
    Read,
    /// Reading all of standard input
    ReadStdin,
    /// Creating or truncating an output file
    Create,
    /// Writing bytes to a file or stream
    Write,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Read => write!(f, "reading"),
            FileOperation::ReadStdin => write!(f, "reading standard input"),
            FileOperation::Create => write!(f, "creating"),
            FileOperation::Write => write!(f, "writing"),
        }
    }
}

/// A failed file operation with the path, purpose and underlying IO error.
#[derive(Error, Debug)]
#[error("File operation failed: {operation} {}", file_path.display())]
pub struct FileOperationError {
    pub operation: FileOperation,
    pub file_path: PathBuf,
    /// Why the file was being accessed, e.g. "template data"
    pub purpose: String,
    #[source]
    pub source: std::io::Error,
}

impl FileOperationError {
    pub fn new(
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self {
            operation,
            file_path: file_path.into(),
            purpose: purpose.into(),
            source,
        }
    }

    /// Get a user-friendly error message with context
    ///
    /// The system error text is always included after the hint.
    pub fn user_message(&self) -> String {
        let mut message = match self.operation {
            FileOperation::ReadStdin => format!("Failed reading standard input for {}", self.purpose),
            _ => format!(
                "Failed {} file '{}' for {}",
                self.operation,
                self.file_path.display(),
                self.purpose
            ),
        };

        match self.source.kind() {
            std::io::ErrorKind::NotFound => {
                message.push_str("\n\nThe file does not exist at the specified path.");
                if self.operation == FileOperation::Create {
                    message.push_str(" Check that the parent directory exists.");
                }
            }
            std::io::ErrorKind::PermissionDenied => {
                message.push_str(&format!(
                    "\n\nPermission denied. Check file/directory permissions for: {}",
                    self.file_path.display()
                ));
            }
            std::io::ErrorKind::InvalidData => {
                message.push_str("\n\nThe input contains invalid data or encoding.");
                message.push_str("\nEnsure it is valid UTF-8 text.");
            }
            _ => message.push_str("\n"),
        }

        message.push_str(&format!("\nError details: {}", self.source));
        message
    }
}

/// Extension trait for Result types to add file operation context
pub trait FileResultExt<T> {
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError>;
}

impl<T> FileResultExt<T> for Result<T, std::io::Error> {
    fn with_file_context(
        self,
        operation: FileOperation,
        file_path: impl Into<PathBuf>,
        purpose: impl Into<String>,
    ) -> Result<T, FileOperationError> {
        self.map_err(|io_error| FileOperationError::new(operation, file_path, purpose, io_error))
    }
}
