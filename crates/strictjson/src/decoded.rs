use crate::ndarray::NdArray;
use crate::number::format_key_f64;

/// The closed set of input shapes the normalizer recognizes.
///
/// This is the engine-side model of whatever the external, untrusted decode
/// step produced. Anything the decoder cannot map onto one of these shapes
/// arrives as `Opaque` with a printable representation, which the normalizer
/// passes through as a string. That fallback is a policy branch, not an
/// error path.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Decoded>),
    Tuple(Vec<Decoded>),
    /// Members in decoder iteration order; order is not stable across runs.
    Set(Vec<Decoded>),
    /// Entries in decoder insertion order.
    Dict(Vec<(DictKey, Decoded)>),
    /// Boxed extended-precision scalar (numpy-style).
    Scalar(Scalar),
    /// Multi-dimensional homogeneous numeric array.
    Array(NdArray),
    /// Unrecognized object, carried as its printable representation.
    Opaque(String),
}

/// Boxed scalar numeric kinds, unwrapped to the nearest native width by the
/// sanitizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

/// Hashable mapping-key kinds. JSON objects only take string keys, so every
/// other kind is coerced through [`DictKey::to_json_key`].
#[derive(Debug, Clone, PartialEq)]
pub enum DictKey {
    Str(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl DictKey {
    /// Deterministic string coercion: strings unchanged, integers decimal,
    /// booleans lowercase, finite floats in canonical non-exponent decimal,
    /// non-finite floats as "nan" / "inf" / "-inf".
    pub fn to_json_key(&self) -> String {
        match self {
            DictKey::Str(s) => s.clone(),
            DictKey::Int(i) => i.to_string(),
            DictKey::Bool(b) => String::from(if *b { "true" } else { "false" }),
            DictKey::Float(f) => {
                if f.is_nan() {
                    String::from("nan")
                } else if f.is_infinite() {
                    String::from(if *f > 0.0 { "inf" } else { "-inf" })
                } else {
                    format_key_f64(*f)
                }
            }
        }
    }
}

impl Decoded {
    /// Adapts a strict-JSON document into the input model. Used by callers
    /// whose decode step already yields JSON (the CLI, tests); richer decode
    /// steps construct `Decoded` directly.
    ///
    /// Non-empty arrays holding only numbers become one-dimensional
    /// [`NdArray`]s so the summarization threshold applies to them; mixed
    /// arrays stay `List`.
    pub fn from_json(v: &serde_json::Value) -> Decoded {
        match v {
            serde_json::Value::Null => Decoded::None,
            serde_json::Value::Bool(b) => Decoded::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Decoded::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Decoded::Scalar(Scalar::U64(u))
                } else {
                    Decoded::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Decoded::Str(s.clone()),
            serde_json::Value::Array(items) => match numeric_array(items) {
                Some(array) => Decoded::Array(array),
                None => Decoded::List(items.iter().map(Decoded::from_json).collect()),
            },
            serde_json::Value::Object(entries) => Decoded::Dict(
                entries
                    .iter()
                    .map(|(k, v)| (DictKey::Str(k.clone()), Decoded::from_json(v)))
                    .collect(),
            ),
        }
    }
}

fn numeric_array(items: &[serde_json::Value]) -> Option<NdArray> {
    if items.is_empty() {
        return None;
    }
    let mut ints = Vec::with_capacity(items.len());
    let mut floats = Vec::with_capacity(items.len());
    let mut all_int = true;
    for item in items {
        let n = item.as_number()?;
        floats.push(n.as_f64().unwrap_or(f64::NAN));
        match n.as_i64() {
            Some(i) if all_int => ints.push(i),
            _ => all_int = false,
        }
    }
    Some(if all_int {
        NdArray::from_i64(vec![ints.len()], ints)
    } else {
        NdArray::from_f64(vec![floats.len()], floats)
    })
}
