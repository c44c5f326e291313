//! Command-line interface for gotemplater.
//!
//! gotemplater is a single-command CLI: every bare argument is a template
//! file, and the flags say where the data comes from, how to decode it, which
//! template to execute and where the output goes.
//!
//! # Usage
//!
//! ```bash
//! # Print to stdout
//! gotemplater -f yaml -d data.yaml template.html
//!
//! # Print to a file
//! gotemplater -d data.json -o rendered.html template.html
//!
//! # Content from stdin, data from config.json, execute the "main" template
//! gotemplater -d config.json -c - -e main template-1.html template-2.html > rendered.html
//! ```
//!
//! # Argument Rules
//!
//! - With no arguments at all the help text is printed and the process exits 0.
//! - Every value-taking flag consumes the very next token, even one that
//!   starts with `-` (`-o -e` writes to a file named `-e`).
//! - Repeating a flag replaces its earlier value.
//! - Any other token starting with `-` is an unrecognized flag, including
//!   joined values such as `-oout.html` or `--output=out.html` and a bare `--`.
//! - The format is case-insensitive and validated before any file is touched.

mod options;
mod render;


pub use options::Options;
pub use render::{render, run};

use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::core::error::TemplaterError;
use crate::data::DataFormat;
use crate::utils::fs::{InputSource, STDIN_MARKER};

/// Log level used when neither `--verbose` nor `--quiet` is given.
const DEFAULT_LOG_LEVEL: &str = "warn";

const EXAMPLES: &str = "\
EXAMPLES:
    Print to stdout:
        gotemplater -f yaml -d data.yaml template.html

    Print to file:
        gotemplater -d data.json -o rendered.html template.html

    Get content from stdin, data from config.json and execute \"main\" defined in the given templates:
        gotemplater -d config.json -c - -e main template-1.html template-2.html > rendered.html";

/// Runtime configuration derived from the global flags.
///
/// Kept separate from [`Cli`] so tests and embedders can build it directly
/// without going through argument parsing.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive; `None` falls back to [`DEFAULT_LOG_LEVEL`].
    ///
    /// A `RUST_LOG` environment variable takes precedence over this value.
    pub log_level: Option<String>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Stdout carries the rendered output, so logs never go there. Calling
    /// this more than once is harmless; later calls are ignored.
    pub fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }
}

/// gotemplater - A super small CLI utility wrapping template execution
///
/// Renders Go-style templates against JSON or YAML data. Without -e the last
/// template file with content outside its {{define}} blocks is executed; with
/// -e the named template (a {{define}} block or a file name) is executed
/// instead.
#[derive(Parser, Debug)]
#[command(name = "gotemplater", version, after_help = EXAMPLES, args_override_self = true)]
pub struct Cli {
    /// Template files to parse, in order
    #[arg(value_name = "TEMPLATE", required = true)]
    pub(crate) templates: Vec<PathBuf>,

    /// Template name to execute instead of the root template
    #[arg(short, long, value_name = "NAME", allow_hyphen_values = true)]
    pub(crate) execute: Option<String>,

    /// Adds a Content and content variable with this file's text, can be - for stdin
    #[arg(short, long, value_name = "FILE", allow_hyphen_values = true)]
    pub(crate) content: Option<String>,

    /// File to write to, by default uses stdout
    #[arg(short, long, value_name = "FILE", allow_hyphen_values = true)]
    pub(crate) output: Option<String>,

    /// Data file to use, by default reads stdin
    #[arg(short, long, value_name = "FILE", allow_hyphen_values = true)]
    pub(crate) data: Option<String>,

    /// Format for the data file, json or yaml
    #[arg(
        short,
        long,
        value_name = "FORMAT",
        default_value = "json",
        value_parser = parse_format,
        allow_hyphen_values = true
    )]
    pub(crate) format: DataFormat,

    /// Log what is being read, decoded and rendered to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub(crate) verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

fn parse_format(value: &str) -> Result<DataFormat, TemplaterError> {
    value.parse()
}

impl Cli {
    /// Parse a full argument vector, program name included.
    ///
    /// Returns `Ok(None)` when no arguments follow the program name; the caller
    /// prints the help text in that case.
    ///
    /// # Errors
    ///
    /// Returns the `clap` error for anything that does not parse, including
    /// `--help` and `--version`, which `clap` reports as errors. A token that
    /// is not an exact flag spelling is reported as an unknown argument before
    /// `clap` sees the arguments.
    pub fn parse_args<I, T>(args: I) -> Result<Option<Self>, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() <= 1 {
            return Ok(None);
        }

        let mut command = Self::command();
        command.build();
        if let Some(flag) = first_unrecognized_flag(&command, &args[1..]) {
            let mut error = clap::Error::new(ErrorKind::UnknownArgument).with_cmd(&command);
            error.insert(ContextKind::InvalidArg, ContextValue::String(flag));
            return Err(error);
        }

        Self::try_parse_from(args).map(Some)
    }

    /// Print the help text to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub fn print_help() -> std::io::Result<()> {
        Self::command().print_help()
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
        }
    }

    /// Turn the parsed flags into the [`Options`] record.
    ///
    /// Empty flag values count as not given, `-` means standard input, and a
    /// missing data source means standard input.
    ///
    /// # Errors
    ///
    /// [`TemplaterError::StdinConflict`] when both the data and the content
    /// would be read from standard input.
    pub fn build_options(&self) -> Result<Options, TemplaterError> {
        let options = Options {
            templates: self.templates.clone(),
            execute: self.execute.clone().filter(|name| !name.is_empty()),
            content: self.content.as_deref().and_then(InputSource::from_arg),
            output: self.output.as_deref().filter(|path| !path.is_empty()).map(PathBuf::from),
            data: self.data.as_deref().and_then(InputSource::from_arg).unwrap_or(InputSource::Stdin),
            format: self.format,
        };
        options.validate()?;
        Ok(options)
    }

    /// Build the options and run the render pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first failure of any stage; nothing is written on failure.
    pub fn execute(self) -> Result<()> {
        let options = self.build_options()?;
        tracing::debug!("Running with {:?}", options);
        run(&options)
    }
}

/// The first token that looks like a flag but is not spelled exactly like one.
///
/// The token after a value-taking flag is its value and never checked, so
/// `-o -e` stays valid.
fn first_unrecognized_flag(command: &clap::Command, args: &[OsString]) -> Option<String> {
    let mut switches = Vec::new();
    let mut valued = Vec::new();
    for arg in command.get_arguments() {
        let spellings = arg
            .get_short()
            .map(|short| format!("-{short}"))
            .into_iter()
            .chain(arg.get_long().map(|long| format!("--{long}")));
        if arg.get_action().takes_values() {
            valued.extend(spellings);
        } else {
            switches.extend(spellings);
        }
    }

    let mut tokens = args.iter().map(|token| token.to_string_lossy());
    while let Some(token) = tokens.next() {
        if valued.iter().any(|flag| *flag == token) {
            tokens.next();
            continue;
        }
        let is_flag_like = token.starts_with('-') && token != STDIN_MARKER;
        if is_flag_like && !switches.iter().any(|flag| *flag == token) {
            return Some(token.into_owned());
        }
    }
    None
}

/// Map `clap`'s unknown-argument error onto [`TemplaterError::UnrecognizedFlag`].
///
/// Returns `None` for every other kind of parse error.
#[must_use]
pub fn unrecognized_flag(error: &clap::Error) -> Option<TemplaterError> {
    if error.kind() != ErrorKind::UnknownArgument {
        return None;
    }

    match error.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(flag)) => Some(TemplaterError::UnrecognizedFlag {
            flag: flag.clone(),
        }),
        _ => None,
    }
}
