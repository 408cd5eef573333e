//! Attribute value model for HCL generation
//!
//! API responses arrive as `serde_json::Value` trees. Classification into
//! the shapes the writer understands happens exactly once, here, when a
//! record is decoded into a [`Value`]. The writer then dispatches on the
//! enum instead of inspecting runtime types, so there is no "unexpected
//! shape" failure mode on the render path.

/// A single attribute value destined for one HCL attribute line.
///
/// `Absent` is the JSON `null` / missing-field case: the whole attribute
/// line is omitted. Note that an empty string is NOT absent; it renders as
/// `attr = ""`. That asymmetry matches the observed behavior of the API
/// and is covered explicitly by the writer tests.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value; the attribute is omitted from output entirely
    Absent,
    /// UTF-8 string, rendered as a quoted literal
    String(String),
    /// Numeric value, rendered bare (`1.0` renders as `1`)
    Number(f64),
    /// Boolean, rendered as a bare keyword
    Bool(bool),
    /// Ordered list; elements need not be of uniform shape
    List(Vec<Value>),
    /// Keyed mapping; insertion order is preserved in output
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Classify a decoded JSON value.
    ///
    /// Total over JSON: every `serde_json::Value` maps to exactly one
    /// variant. Object key order is preserved (`serde_json` is built with
    /// `preserve_order`).
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            // as_f64 is only None for arbitrary-precision numbers, which
            // this crate does not enable
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Value::Number(f),
                None => Value::Absent,
            },
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from_json(value)))
                    .collect(),
            ),
        }
    }

    /// Whether this value renders as a single literal token
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::String(_) | Value::Number(_) | Value::Bool(_))
    }

    /// Whether this value is the omitted-entirely case
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}
