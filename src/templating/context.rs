//! The variables a template is executed against.

use gtmpl::Value as TemplateValue;
use serde_json::Value;
use std::collections::HashMap;

use crate::data::DataMap;

/// Keys the injected content is stored under, so templates can use either
/// `{{.Content}}` or `{{.content}}`.
pub const CONTENT_KEYS: [&str; 2] = ["Content", "content"];

/// The template context: decoded data plus the optional content.
///
/// Built once before rendering and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateContext {
    data: DataMap,
}

impl TemplateContext {
    #[must_use]
    pub const fn new(data: DataMap) -> Self {
        Self {
            data,
        }
    }

    /// Store `content` under both [`CONTENT_KEYS`], replacing any data values
    /// with those names.
    ///
    /// Empty content is ignored and leaves the data untouched.
    pub fn insert_content(&mut self, content: &str) {
        if content.is_empty() {
            return;
        }

        for key in CONTENT_KEYS {
            if self.data.insert(key.to_string(), Value::String(content.to_string())).is_some() {
                tracing::warn!("Content replaces the '{}' key from the data", key);
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert into the engine's context type.
    #[must_use]
    pub fn to_engine_context(&self) -> gtmpl::Context {
        let root: HashMap<String, TemplateValue> =
            self.data.iter().map(|(key, value)| (key.clone(), to_template_value(value))).collect();
        gtmpl::Context::from(TemplateValue::Map(root))
    }
}

impl From<DataMap> for TemplateContext {
    fn from(data: DataMap) -> Self {
        Self::new(data)
    }
}

/// Map a decoded value onto the engine's dynamic value.
fn to_template_value(value: &Value) -> TemplateValue {
    match value {
        Value::Null => TemplateValue::Nil,
        Value::Bool(b) => TemplateValue::from(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                TemplateValue::from(i)
            } else if let Some(u) = n.as_u64() {
                TemplateValue::from(u)
            } else {
                TemplateValue::from(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => TemplateValue::from(s.clone()),
        Value::Array(items) => TemplateValue::Array(items.iter().map(to_template_value).collect()),
        Value::Object(map) => TemplateValue::Map(
            map.iter().map(|(key, value)| (key.clone(), to_template_value(value))).collect(),
        ),
    }
}
