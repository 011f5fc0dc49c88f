//! strictjson turns an arbitrary, previously-decoded object graph into a
//! value tree that is guaranteed to serialize as strict JSON: no
//! NaN/Infinity tokens, no non-JSON primitives, no unbounded payloads from
//! large numeric arrays.
//!
//! The input comes from an external, untrusted decode step and is modeled
//! as the closed [`Decoded`] enum. [`normalize`] walks it depth-first:
//! non-finite floats become null, binary blobs become tagged base64
//! objects, and homogeneous numeric arrays above a caller-tunable element
//! threshold are replaced by a compact summary (dtype, shape, finite
//! min/max, leading sample) instead of being fully expanded.
//!
//! ```
//! use strictjson::{normalize, Decoded, NormalizeOptions, Value};
//!
//! let input = Decoded::List(vec![Decoded::Float(1.5), Decoded::Float(f64::NAN)]);
//! let out = normalize(&input, &NormalizeOptions::default());
//! assert_eq!(out, Value::Array(vec![Value::Float(1.5), Value::Null]));
//! ```

pub mod decoded;
pub mod envelope;
pub mod error;
pub mod ndarray;
pub mod normalize;
mod number;
pub mod options;
pub mod sanitize;
pub mod summarize;
pub mod value;

pub use crate::decoded::{Decoded, DictKey, Scalar};
pub use crate::envelope::Envelope;
pub use crate::error::{Error, Result};
pub use crate::ndarray::{Dtype, Elements, NdArray};
pub use crate::normalize::normalize;
pub use crate::options::NormalizeOptions;
pub use crate::value::{ArraySummary, BytesBlob, Value};

/// Parses strict JSON text into the input model. This is the stand-in
/// decode step used by the CLI and tests; richer decoders construct
/// [`Decoded`] directly. Parse failures surface as [`Error::Decode`] with
/// the category and message a caller can forward verbatim.
pub fn decode_json_str(s: &str) -> Result<Decoded> {
    let v: serde_json::Value = serde_json::from_str(s).map_err(|e| Error::Decode {
        kind: "JsonDecodeError".to_string(),
        message: e.to_string(),
    })?;
    Ok(Decoded::from_json(&v))
}

/// Encodes a normalized tree as strict JSON text, rejecting residual
/// non-finite floats instead of emitting them.
pub fn to_json_string(value: &Value) -> Result<String> {
    if !value.is_json_safe() {
        return Err(Error::NonFinite);
    }
    Ok(serde_json::to_string(value)?)
}
