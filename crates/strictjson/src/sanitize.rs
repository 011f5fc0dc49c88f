//! Numeric sanitization policy: every scalar reached during the walk goes
//! through here. Finite floats pass unchanged, NaN and ±Infinity become
//! `Null`, integers and booleans pass through as themselves.

use crate::decoded::Scalar;
use crate::ndarray::Elements;
use crate::value::Value;

pub fn sanitize_f64(x: f64) -> Value {
    if x.is_finite() {
        Value::Float(x)
    } else {
        Value::Null
    }
}

/// `u64` above `i64::MAX` cannot ride in `Int`; it degrades to a float, the
/// same representation the summary statistics use.
pub fn sanitize_u64(x: u64) -> Value {
    match i64::try_from(x) {
        Ok(i) => Value::Int(i),
        Err(_) => Value::Float(x as f64),
    }
}

/// Unwraps a boxed scalar to its nearest native representation, then applies
/// the scalar rule.
pub fn sanitize_scalar(s: Scalar) -> Value {
    match s {
        Scalar::Bool(b) => Value::Bool(b),
        Scalar::I8(x) => Value::Int(x.into()),
        Scalar::I16(x) => Value::Int(x.into()),
        Scalar::I32(x) => Value::Int(x.into()),
        Scalar::I64(x) => Value::Int(x),
        Scalar::U8(x) => Value::Int(x.into()),
        Scalar::U16(x) => Value::Int(x.into()),
        Scalar::U32(x) => Value::Int(x.into()),
        Scalar::U64(x) => sanitize_u64(x),
        Scalar::F32(x) => sanitize_f64(x.into()),
        Scalar::F64(x) => sanitize_f64(x),
    }
}

/// Applies the scalar rule elementwise to the first `n` elements of a flat
/// buffer, preserving order. Non-finite elements become `Null` but keep
/// their position.
pub fn sanitize_sample(flat: &Elements, n: usize) -> Vec<Value> {
    match flat {
        Elements::Bool(xs) => xs.iter().take(n).map(|&b| Value::Bool(b)).collect(),
        Elements::Int(xs) => xs.iter().take(n).map(|&x| Value::Int(x)).collect(),
        Elements::Uint(xs) => xs.iter().take(n).map(|&x| sanitize_u64(x)).collect(),
        Elements::Float(xs) => xs.iter().take(n).map(|&x| sanitize_f64(x)).collect(),
    }
}

/// Whole-buffer variant used when an array is expanded instead of
/// summarized.
pub fn sanitize_elements(flat: &Elements) -> Vec<Value> {
    sanitize_sample(flat, usize::MAX)
}
