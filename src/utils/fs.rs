//! Reading inputs and writing the rendered output.
//!
//! Inputs come either from a file or from standard input ([`InputSource`]);
//! the output goes either to a file or to standard output. Every IO failure is
//! wrapped in a [`FileOperationError`] that names the path and what the file
//! was needed for.

use anyhow::Result;
use std::fmt;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use crate::core::file_error::{FileOperation, FileResultExt};

/// The command-line token that stands for standard input.
pub const STDIN_MARKER: &str = "-";

/// Where an input (data or content) is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Interpret a flag value: empty means "not given", `-` means stdin.
    ///
    /// ```rust
    /// use gotemplater::utils::fs::InputSource;
    ///
    /// assert_eq!(InputSource::from_arg(""), None);
    /// assert_eq!(InputSource::from_arg("-"), Some(InputSource::Stdin));
    /// assert!(matches!(InputSource::from_arg("data.json"), Some(InputSource::File(_))));
    /// ```
    #[must_use]
    pub fn from_arg(value: &str) -> Option<Self> {
        match value {
            "" => None,
            STDIN_MARKER => Some(Self::Stdin),
            path => Some(Self::File(PathBuf::from(path))),
        }
    }

    #[must_use]
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// The path used in error messages; `-` for stdin.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Stdin => Path::new(STDIN_MARKER),
            Self::File(path) => path,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "standard input"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Whether standard input is attached to an interactive terminal.
#[must_use]
pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}

/// Read an input source completely as raw bytes.
///
/// # Errors
///
/// Returns a [`FileOperationError`](crate::core::file_error::FileOperationError)
/// if the file cannot be read or stdin fails.
pub fn read_input(source: &InputSource, purpose: &str) -> Result<Vec<u8>> {
    let bytes = match source {
        InputSource::Stdin => {
            let mut buffer = Vec::new();
            io::stdin().lock().read_to_end(&mut buffer).with_file_context(
                FileOperation::ReadStdin,
                STDIN_MARKER,
                purpose,
            )?;
            buffer
        }
        InputSource::File(path) => {
            fs::read(path).with_file_context(FileOperation::Read, path, purpose)?
        }
    };

    tracing::debug!("Read {} bytes of {} from {}", bytes.len(), purpose, source);
    Ok(bytes)
}

/// Read an input source completely as UTF-8 text.
///
/// # Errors
///
/// Fails like [`read_input`], and with an `InvalidData` file error when the
/// bytes are not valid UTF-8.
pub fn read_input_to_string(source: &InputSource, purpose: &str) -> Result<String> {
    let bytes = read_input(source, purpose)?;
    let operation = if source.is_stdin() {
        FileOperation::ReadStdin
    } else {
        FileOperation::Read
    };

    Ok(String::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        .with_file_context(operation, source.path(), purpose)?)
}

/// Read a text file, e.g. a template.
///
/// # Errors
///
/// Returns an error with file context if the file cannot be read or is not UTF-8.
pub fn read_text_file(path: &Path, purpose: &str) -> Result<String> {
    Ok(fs::read_to_string(path).with_file_context(FileOperation::Read, path, purpose)?)
}

/// Write the rendered output to a file, or to stdout when `destination` is `None`.
///
/// A file destination is created if missing and truncated otherwise. Parent
/// directories are not created.
///
/// # Errors
///
/// Returns an error with file context if the file cannot be created or written,
/// or if writing to stdout fails.
pub fn write_output(destination: Option<&Path>, content: &[u8]) -> Result<()> {
    match destination {
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content).with_file_context(
                FileOperation::Write,
                "<stdout>",
                "rendered output",
            )?;
            stdout.flush().with_file_context(FileOperation::Write, "<stdout>", "rendered output")?;
            tracing::debug!("Wrote {} bytes to standard output", content.len());
        }
        Some(path) => {
            let mut file = fs::File::create(path).with_file_context(
                FileOperation::Create,
                path,
                "rendered output",
            )?;
            file.write_all(content).with_file_context(
                FileOperation::Write,
                path,
                "rendered output",
            )?;
            tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
        }
    }

    Ok(())
}
