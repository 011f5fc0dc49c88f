//! The recursive walk that turns a decoded input graph into a JSON-safe
//! [`Value`] tree.

use crate::decoded::Decoded;
use crate::ndarray::{NdArray, element_count};
use crate::options::NormalizeOptions;
use crate::sanitize::{sanitize_elements, sanitize_f64, sanitize_scalar};
use crate::summarize::summarize;
use crate::value::{BytesBlob, Value};

/// Normalizes one decoded value. Total over well-formed acyclic input: every
/// recognized shape maps to a `Value`, and the fallback arm string-coerces
/// anything unrecognized rather than failing. Recursion depth follows input
/// nesting depth; cycle and depth guards are the caller's concern.
pub fn normalize(input: &Decoded, options: &NormalizeOptions) -> Value {
    match input {
        Decoded::Array(array) => normalize_array(array, options),
        Decoded::Scalar(s) => sanitize_scalar(*s),
        Decoded::Bytes(data) => Value::Bytes(BytesBlob::from_raw(data)),
        Decoded::Set(members) => normalize_seq(members, options),
        Decoded::Tuple(items) => normalize_seq(items, options),
        Decoded::Dict(entries) => Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.to_json_key(), normalize(v, options)))
                .collect(),
        ),
        Decoded::List(items) => normalize_seq(items, options),
        Decoded::None => Value::Null,
        Decoded::Bool(b) => Value::Bool(*b),
        Decoded::Int(i) => Value::Int(*i),
        Decoded::Float(f) => sanitize_f64(*f),
        Decoded::Str(s) => Value::String(s.clone()),
        Decoded::Opaque(repr) => Value::String(repr.clone()),
    }
}

/// Over-threshold arrays become a summary descriptor (when enabled);
/// everything else is expanded to nested arrays of sanitized scalars in
/// row-major order.
fn normalize_array(array: &NdArray, options: &NormalizeOptions) -> Value {
    if options.summarize_large && array.element_count() > options.elem_threshold {
        return Value::ArraySummary(summarize(array, options.sample_n));
    }
    let flat = array.to_row_major();
    nest(sanitize_elements(&flat), array.shape())
}

fn normalize_seq(items: &[Decoded], options: &NormalizeOptions) -> Value {
    Value::Array(items.iter().map(|v| normalize(v, options)).collect())
}

/// Rebuilds the nested array structure from a row-major flat sequence. A
/// zero-dimensional shape yields the bare scalar, matching how scalar
/// arrays collapse when fully expanded.
fn nest(values: Vec<Value>, shape: &[usize]) -> Value {
    let (&dim, rest) = match shape.split_first() {
        None => return values.into_iter().next().unwrap_or(Value::Null),
        Some(split) => split,
    };
    if rest.is_empty() {
        return Value::Array(values);
    }
    let per_group = element_count(rest);
    let mut iter = values.into_iter();
    let groups = (0..dim)
        .map(|_| nest(iter.by_ref().take(per_group).collect(), rest))
        .collect();
    Value::Array(groups)
}
