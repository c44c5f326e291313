//! Utilities shared by the pipeline stages
//!
//! - [`fs`] - Input sources (file or stdin), text reads and the output writer

pub mod fs;

pub use fs::{InputSource, read_input, read_input_to_string, write_output};
