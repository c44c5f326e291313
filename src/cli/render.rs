//! The render pipeline: data, content, templates, output.
//!
//! Each stage runs only after the previous one succeeded. The output is
//! produced in memory first, so a failed run never creates or truncates the
//! output file.

use anyhow::Result;

use super::options::Options;
use crate::data::load_data;
use crate::templating::{TemplateContext, TemplateSet, load_content};
use crate::utils::fs::write_output;

/// Run every stage except the final write and return the rendered text.
///
/// # Errors
///
/// Returns the first failure: reading or decoding the data, reading the
/// content, reading or parsing a template, or executing it.
pub fn render(options: &Options) -> Result<String> {
    let data = load_data(&options.data, options.format)?;

    let mut context = TemplateContext::new(data);
    if let Some(content) = load_content(options.content.as_ref())? {
        context.insert_content(&content);
    }

    let templates = TemplateSet::from_files(&options.templates)?;
    let rendered = templates.render(options.execute.as_deref(), &context)?;
    tracing::debug!("Rendered {} bytes", rendered.len());

    Ok(rendered)
}

/// Render and write the result to the output file or standard output.
///
/// # Errors
///
/// Returns any [`render`] failure, or a failure to write the output.
pub fn run(options: &Options) -> Result<()> {
    let rendered = render(options)?;

    write_output(options.output.as_deref(), rendered.as_bytes())?;

    if let Some(path) = &options.output {
        tracing::info!("Wrote {}", path.display());
    }
    Ok(())
}
