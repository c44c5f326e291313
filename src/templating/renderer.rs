//! Template set parsing and execution with gtmpl.
//!
//! All template files share one namespace. The root template, executed when no
//! name is given, is the body of the last file that has one: text or actions
//! outside its `{{define}}` blocks. When no file has a body the first file is
//! the root and renders nothing. Every file is also
//! registered under its file name, and every `{{define "name"}}` from any file
//! can be executed or called with `{{template "name" .}}`. When two files
//! define the same name, the later file wins.

use gtmpl::Template;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use strsim::levenshtein;

use super::context::TemplateContext;
use crate::core::error::TemplaterError;
use crate::utils::fs::read_text_file;

/// Maximum allowed Levenshtein distance as a percentage of the requested name
/// length for "did you mean" suggestions.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

const MAX_SUGGESTIONS: usize = 3;

/// Matches the name in `{{define "name"}}` and `{{block "name" .}}` actions.
static DEFINITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{\{-?\s*(?:define|block)\s+(?:"([^"]*)"|`([^`]*)`)"#)
        .expect("definition pattern is a valid regex")
});

/// Matches `{{/* ... */}}` comments, including trim markers.
static COMMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{-?\s*/\*.*?\*/\s*-?\}\}").expect("comment pattern is a valid regex")
});

/// One parsed template file.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// The file name the template is registered under
    pub name: String,
    pub path: PathBuf,
    pub source: String,
    /// Whether anything is left outside the file's `{{define}}` blocks
    pub has_body: bool,
}

/// The template files given on the command line, ready to execute.
#[derive(Debug, Default)]
pub struct TemplateSet {
    files: Vec<TemplateFile>,
    /// Every name `--execute` can select, in first-seen order
    names: Vec<String>,
}

impl TemplateSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse every file, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or fails to parse.
    pub fn from_files(paths: &[PathBuf]) -> anyhow::Result<Self> {
        let mut set = Self::new();
        for path in paths {
            let source = read_text_file(path, "template")?;
            set.add_source(path, source)?;
        }
        tracing::debug!("Parsed {} template file(s) defining {:?}", set.files.len(), set.names);
        Ok(set)
    }

    /// Add a template from memory; `path` supplies the registered file name.
    ///
    /// # Errors
    ///
    /// [`TemplaterError::TemplateParse`] if the source does not parse.
    pub fn add_source(
        &mut self,
        path: impl Into<PathBuf>,
        source: impl Into<String>,
    ) -> Result<(), TemplaterError> {
        let path = path.into();
        let source = source.into();
        let name = registered_name(&path);

        Template::default().add_template(name.clone(), source.clone()).map_err(|e| {
            TemplaterError::TemplateParse {
                file: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        self.remember_name(name.clone());
        for defined in definition_names(&source) {
            self.remember_name(defined);
        }

        let has_body = has_body(&source);
        self.files.push(TemplateFile {
            name,
            path,
            source,
            has_body,
        });
        Ok(())
    }

    #[must_use]
    pub fn files(&self) -> &[TemplateFile] {
        &self.files
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Execute the root template, or the named one, against `context`.
    ///
    /// # Errors
    ///
    /// [`TemplaterError::TemplateNotFound`] for an unknown name and
    /// [`TemplaterError::TemplateExecute`] for any other execution failure.
    pub fn render(
        &self,
        name: Option<&str>,
        context: &TemplateContext,
    ) -> Result<String, TemplaterError> {
        match name {
            None => self.render_root(context),
            Some(name) => self.render_named(name, context),
        }
    }

    fn render_root(&self, context: &TemplateContext) -> Result<String, TemplaterError> {
        let root = self.files.iter().rev().find(|file| file.has_body).or_else(|| self.files.first());
        let (root_name, root_source) = match root {
            Some(file) => (file.path.display().to_string(), file.source.as_str()),
            None => ("<root>".to_string(), ""),
        };

        let template = self.compile(root_source)?;
        template.render(&context.to_engine_context()).map_err(|e| {
            TemplaterError::TemplateExecute {
                name: root_name,
                reason: e.to_string(),
            }
        })
    }

    fn render_named(&self, name: &str, context: &TemplateContext) -> Result<String, TemplaterError> {
        if !self.contains(name) {
            return Err(TemplaterError::TemplateNotFound {
                name: name.to_string(),
                suggestions: similar_names(name, &self.names),
            });
        }

        let invocation = format!("{{{{template {} .}}}}", quote_name(name));
        let template = self.compile(&invocation)?;

        template.render(&context.to_engine_context()).map_err(|e| {
            TemplaterError::TemplateExecute {
                name: name.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Build an engine template whose root body is `root_source`, with every
    /// file registered after it so their definitions are shared.
    fn compile(&self, root_source: &str) -> Result<Template, TemplaterError> {
        let mut template = Template::default();
        template.parse(root_source.to_string()).map_err(|e| TemplaterError::TemplateParse {
            file: "<root>".to_string(),
            reason: e.to_string(),
        })?;

        for file in &self.files {
            template.add_template(file.name.clone(), file.source.clone()).map_err(|e| {
                TemplaterError::TemplateParse {
                    file: file.path.display().to_string(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(template)
    }

    fn remember_name(&mut self, name: String) {
        if !self.contains(&name) {
            self.names.push(name);
        }
    }
}

/// The name a file is registered under: its file name without directories.
fn registered_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Names introduced by `define` and `block` actions in `source`, ignoring
/// commented-out actions.
fn definition_names(source: &str) -> Vec<String> {
    let source = COMMENT_PATTERN.replace_all(source, "");
    DEFINITION_PATTERN
        .captures_iter(&source)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Quote a template name as a string literal for a `{{template}}` action.
fn quote_name(name: &str) -> String {
    // JSON string escapes are a subset of the template language's
    serde_json::Value::String(name.to_string()).to_string()
}

/// Known names close to `requested`, best first.
///
/// Comparison ignores case, so `Main` suggests `main`. Equally close names
/// keep the order they were defined in.
fn similar_names(requested: &str, known: &[String]) -> Vec<String> {
    let wanted = requested.to_lowercase();
    if wanted.is_empty() {
        return Vec::new();
    }
    let budget = wanted.chars().count() * SIMILARITY_THRESHOLD_PERCENT / 100;

    let mut candidates: Vec<(usize, &String)> = known
        .iter()
        .filter_map(|name| {
            let distance = levenshtein(&wanted, &name.to_lowercase());
            (distance <= budget).then_some((distance, name))
        })
        .collect();
    candidates.sort_by_key(|(distance, _)| *distance);

    candidates.into_iter().take(MAX_SUGGESTIONS).map(|(_, name)| name.clone()).collect()
}

/// Whether `source` has anything outside its `{{define}}` blocks.
///
/// Whitespace and comments do not count. A top-level `{{block}}` does, since
/// it renders in place. Actions are split at the first `}}`, which is enough
/// for deciding emptiness; the engine does the real parsing.
fn has_body(source: &str) -> bool {
    let mut rest = source;
    // Nesting depth inside a `{{define}}`, counting its inner control blocks
    let mut depth = 0usize;

    loop {
        let Some(open) = rest.find("{{") else {
            return depth == 0 && !rest.trim().is_empty();
        };
        if depth == 0 && !rest[..open].trim().is_empty() {
            return true;
        }

        let action = rest[open + 2..].strip_prefix('-').unwrap_or(&rest[open + 2..]).trim_start();
        if let Some(comment) = action.strip_prefix("/*") {
            let Some(end) = comment.find("*/") else {
                return false;
            };
            let tail = &comment[end + 2..];
            rest = tail.find("}}").map_or("", |close| &tail[close + 2..]);
            continue;
        }

        let Some(close) = action.find("}}") else {
            return depth == 0;
        };
        let keyword = action[..close].split_whitespace().next().unwrap_or_default();
        rest = &action[close + 2..];

        match keyword {
            "define" => depth += 1,
            "if" | "range" | "with" | "block" if depth > 0 => depth += 1,
            "end" if depth > 0 => depth -= 1,
            _ if depth == 0 => return true,
            _ => {}
        }
    }
}
