//! Template rendering for gotemplater.
//!
//! Templates use the Go template language, executed by the [`gtmpl`] engine.
//! This module wires the engine to the rest of the pipeline:
//!
//! - [`context`] - [`TemplateContext`], the decoded data plus injected content
//! - [`content`] - [`load_content`], reading the `-c/--content` input
//! - [`renderer`] - [`TemplateSet`], parsing the files and executing the root
//!   or a named template
//!
//! # Template Syntax
//!
//! ```text
//! {{.Name}}                         top-level data key
//! {{.site.title}}                   nested mapping access
//! {{range .items}}{{.}}{{end}}      iterate a sequence
//! {{define "main"}}...{{end}}       named template, selectable with -e main
//! {{template "header" .}}           call a named template from any file
//! {{.Content}} / {{.content}}       text given with -c
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gotemplater::templating::{TemplateContext, TemplateSet};
//!
//! let mut set = TemplateSet::new();
//! set.add_source("hello.txt", "Hello {{.Name}}")?;
//!
//! let data = serde_json::json!({"Name": "Ada"});
//! let context = TemplateContext::new(data.as_object().cloned().unwrap_or_default());
//! assert_eq!(set.render(None, &context)?, "Hello Ada");
//! # Ok::<(), gotemplater::core::TemplaterError>(())
//! ```

pub mod content;
pub mod context;
pub mod renderer;

pub use content::load_content;
pub use context::{CONTENT_KEYS, TemplateContext};
pub use renderer::{TemplateFile, TemplateSet};
