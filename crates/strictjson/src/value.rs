use base64::Engine;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// JSON-safe output tree.
///
/// `Float` is always finite after normalization; non-finite inputs become
/// `Null`. `Object` keeps insertion order. `Bytes` and `ArraySummary`
/// serialize as tagged objects (`__bytes__` / `__ndarray__`) so consumers
/// can tell them apart from plain objects.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
    Bytes(BytesBlob),
    ArraySummary(ArraySummary),
}

/// A binary blob carried as standard base64 text.
#[derive(Debug, Clone, PartialEq)]
pub struct BytesBlob {
    pub base64: String,
}

impl BytesBlob {
    pub fn from_raw(data: &[u8]) -> Self {
        Self {
            base64: base64::engine::general_purpose::STANDARD.encode(data),
        }
    }
}

/// Compact descriptor substituted for an over-threshold array.
///
/// `min`/`max` are taken over the finite elements only and are absent when
/// the array has none (e.g. all-NaN). `sample` holds the first elements in
/// row-major order, already sanitized.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySummary {
    pub dtype: String,
    pub shape: Vec<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub sample: Vec<Value>,
}

impl Value {
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_)
        )
    }

    /// Re-checks invariant I1 over the whole tree. Normalization upholds it
    /// by construction; the service boundary calls this before encoding as a
    /// defense-in-depth guard against hand-built trees.
    pub fn is_json_safe(&self) -> bool {
        match self {
            Value::Float(f) => f.is_finite(),
            Value::Array(items) => items.iter().all(Value::is_json_safe),
            Value::Object(entries) => entries.iter().all(|(_, v)| v.is_json_safe()),
            Value::ArraySummary(s) => {
                s.min.is_none_or(f64::is_finite)
                    && s.max.is_none_or(f64::is_finite)
                    && s.sample.iter().all(Value::is_json_safe)
            }
            _ => true,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Bytes(blob) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("__bytes__", &true)?;
                map.serialize_entry("base64", &blob.base64)?;
                map.end()
            }
            Value::ArraySummary(s) => {
                let mut map = serializer.serialize_map(Some(6))?;
                map.serialize_entry("__ndarray__", &true)?;
                map.serialize_entry("dtype", &s.dtype)?;
                map.serialize_entry("shape", &s.shape)?;
                map.serialize_entry("min", &s.min)?;
                map.serialize_entry("max", &s.max)?;
                map.serialize_entry("sample", &s.sample)?;
                map.end()
            }
        }
    }
}
