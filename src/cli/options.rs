//! The resolved settings for one run.

use std::path::PathBuf;

use crate::core::error::TemplaterError;
use crate::data::DataFormat;
use crate::utils::fs::InputSource;

/// Everything a run needs, after argument parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Template files in command-line order
    pub templates: Vec<PathBuf>,
    /// Template to execute instead of the root
    pub execute: Option<String>,
    pub content: Option<InputSource>,
    /// `None` writes to standard output
    pub output: Option<PathBuf>,
    pub data: InputSource,
    pub format: DataFormat,
}

impl Options {
    /// Options for rendering `templates` with data from standard input.
    #[must_use]
    pub fn new(templates: Vec<PathBuf>) -> Self {
        Self {
            templates,
            execute: None,
            content: None,
            output: None,
            data: InputSource::Stdin,
            format: DataFormat::default(),
        }
    }

    /// Check the combination of inputs.
    ///
    /// # Errors
    ///
    /// [`TemplaterError::StdinConflict`] when the data and the content both
    /// come from standard input.
    pub fn validate(&self) -> Result<(), TemplaterError> {
        if self.data.is_stdin() && self.content.as_ref().is_some_and(InputSource::is_stdin) {
            return Err(TemplaterError::StdinConflict {
                first: "the data".to_string(),
                second: "the content".to_string(),
            });
        }
        Ok(())
    }
}
