//! gotemplater - A super small CLI utility wrapping template execution
//!
//! gotemplater renders Go-style templates against data read from a JSON or
//! YAML file (or standard input) and writes the result to a file or standard
//! output. It is meant for static-site style pipelines where another tool
//! produces a fragment of HTML that is dropped into a layout.
//!
//! # Architecture Overview
//!
//! A run is a straight pipeline, each stage starting only after the previous
//! one succeeded:
//!
//! 1. **Arguments** - [`cli::Cli`] parses the flags into [`cli::Options`]
//! 2. **Data** - [`data::load_data`] reads and decodes the data into a mapping
//! 3. **Content** - [`templating::load_content`] reads the optional `-c` text,
//!    which is added to the context as `Content` and `content`
//! 4. **Templates** - [`templating::TemplateSet`] parses every template file
//! 5. **Render** - the root template (the last file with content outside
//!    `{{define}}` blocks) or the `-e` template is executed into memory
//! 6. **Output** - [`utils::fs::write_output`] writes the result to `-o` or
//!    standard output
//!
//! Nothing is written when any stage fails.
//!
//! # Core Modules
//!
//! - [`cli`] - Argument parsing, logging setup and the render pipeline
//! - [`core`] - Error types and user-facing error formatting
//! - [`data`] - Data formats and decoding
//! - [`templating`] - Template context, content loading and rendering
//! - [`utils`] - Input and output helpers
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Print to stdout
//! gotemplater -f yaml -d data.yaml template.html
//!
//! # Print to a file
//! gotemplater -d data.json -o rendered.html template.html
//!
//! # Content from stdin, data from config.json, execute "main"
//! gotemplater -d config.json -c - -e main template-1.html template-2.html > rendered.html
//! ```
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use gotemplater::cli::{Options, run};
//! use gotemplater::data::DataFormat;
//! use gotemplater::utils::fs::InputSource;
//!
//! let mut options = Options::new(vec!["layout.html".into()]);
//! options.data = InputSource::File("site.yaml".into());
//! options.format = DataFormat::Yaml;
//! options.output = Some("index.html".into());
//! run(&options)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod templating;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
