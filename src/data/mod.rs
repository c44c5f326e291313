//! Loading the template data.
//!
//! The data is read from a file or standard input and decoded as JSON or YAML
//! into a [`DataMap`]: a string-keyed mapping of dynamic values. Both formats
//! end up in the same `serde_json` representation, so equivalent JSON and
//! YAML documents render identically.
//!
//! # Empty input
//!
//! Input that is empty or only whitespace decodes to an empty mapping in either
//! format. When the data would come from standard input and stdin is an
//! interactive terminal, [`load_data`] does not wait for input and returns an
//! empty mapping as well.
//!
//! # Example
//!
//! ```rust
//! use gotemplater::data::{decode_data, DataFormat};
//!
//! let data = decode_data(b"Name: Ada\n", DataFormat::Yaml, "inline").unwrap();
//! assert_eq!(data["Name"], "Ada");
//! ```

mod format;

pub use format::DataFormat;

use anyhow::Result;
use serde_json::{Map, Number, Value};

use crate::core::error::TemplaterError;
use crate::utils::fs::{InputSource, read_input, stdin_is_terminal};

/// The decoded data: top-level keys mapped to dynamic values.
pub type DataMap = Map<String, Value>;

/// Read and decode the data for a render.
///
/// # Errors
///
/// Returns an error if the source cannot be read or the bytes do not decode
/// to a mapping in `format`.
pub fn load_data(source: &InputSource, format: DataFormat) -> Result<DataMap> {
    if source.is_stdin() && stdin_is_terminal() {
        tracing::debug!("Standard input is a terminal, rendering with empty data");
        return Ok(DataMap::new());
    }

    let bytes = read_input(source, "template data")?;
    let data = decode_data(&bytes, format, &source.to_string())?;
    tracing::debug!("Decoded {} top-level keys of {} data from {}", data.len(), format, source);
    Ok(data)
}

/// Decode raw bytes into a [`DataMap`].
///
/// `source_name` is only used in error messages.
///
/// # Errors
///
/// [`TemplaterError::DataDecode`] when the bytes are malformed, and
/// [`TemplaterError::DataNotMapping`] when the top-level value is not a mapping.
pub fn decode_data(
    bytes: &[u8],
    format: DataFormat,
    source_name: &str,
) -> Result<DataMap, TemplaterError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(DataMap::new());
    }

    let decode_error = |reason: String| TemplaterError::DataDecode {
        format: format.to_string(),
        source_name: source_name.to_string(),
        reason,
    };

    let value = match format {
        DataFormat::Json => {
            serde_json::from_slice::<Value>(bytes).map_err(|e| decode_error(e.to_string()))?
        }
        DataFormat::Yaml => {
            let yaml = serde_yaml::from_slice::<serde_yaml::Value>(bytes)
                .map_err(|e| decode_error(e.to_string()))?;
            yaml_to_json(yaml).map_err(decode_error)?
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        // A YAML document holding only `~` or comments
        Value::Null if format == DataFormat::Yaml => Ok(DataMap::new()),
        other => Err(TemplaterError::DataNotMapping {
            source_name: source_name.to_string(),
            found: value_kind(&other).to_string(),
        }),
    }
}

/// Convert a YAML value into the shared dynamic representation.
///
/// Scalar mapping keys are stringified, tags are dropped, and floats JSON
/// cannot hold (NaN, infinities) become their YAML spelling.
fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, String> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map_or_else(|| Value::String(n.to_string()), Value::Number)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect::<Result<Vec<_>, _>>()?)
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(yaml_key(&key)?, yaml_to_json(value)?);
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn yaml_key(key: &serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(&tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => {
            Err("mapping keys must be scalars, found a sequence or mapping used as a key".to_string())
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
