//! Loading the `-c/--content` input.
//!
//! The content is raw text (usually an HTML fragment produced by another tool)
//! that the template places with `{{.Content}}` or `{{.content}}`.

use anyhow::Result;

use crate::utils::fs::{InputSource, read_input_to_string};

/// Read the content, if one was requested.
///
/// Returns `Ok(None)` when no content source was given.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read or is not UTF-8.
pub fn load_content(source: Option<&InputSource>) -> Result<Option<String>> {
    let Some(source) = source else {
        return Ok(None);
    };

    let content = read_input_to_string(source, "content")?;
    tracing::debug!("Loaded {} bytes of content from {}", content.len(), source);
    Ok(Some(content))
}
