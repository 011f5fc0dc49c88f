//! Large-array summarization: over-threshold arrays are replaced by a
//! compact descriptor (dtype, shape, finite min/max, bounded sample) instead
//! of a fully materialized nested sequence.

use crate::ndarray::{Elements, NdArray};
use crate::sanitize::sanitize_sample;
use crate::value::ArraySummary;

/// Builds the descriptor for an over-threshold array. The caller decides
/// when to summarize; this only describes.
pub fn summarize(array: &NdArray, sample_n: usize) -> ArraySummary {
    let flat = array.to_row_major();
    let (min, max) = if flat.is_empty() {
        (None, None)
    } else {
        finite_bounds(&flat)
    };
    ArraySummary {
        dtype: array.dtype().name().to_string(),
        shape: array.shape().to_vec(),
        min,
        max,
        sample: sanitize_sample(&flat, sample_n),
    }
}

/// Min/max over the finite elements only, as floats. Both absent when the
/// array has no finite element (empty, or all NaN/Infinity).
fn finite_bounds(flat: &Elements) -> (Option<f64>, Option<f64>) {
    match flat {
        Elements::Bool(xs) => bounds(xs.iter().map(|&b| u8::from(b) as f64)),
        Elements::Int(xs) => bounds(xs.iter().map(|&x| x as f64)),
        Elements::Uint(xs) => bounds(xs.iter().map(|&x| x as f64)),
        Elements::Float(xs) => bounds(xs.iter().copied()),
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (Option<f64>, Option<f64>) {
    let mut min = None;
    let mut max = None;
    for x in values {
        if !x.is_finite() {
            continue;
        }
        min = Some(min.map_or(x, |m: f64| m.min(x)));
        max = Some(max.map_or(x, |m: f64| m.max(x)));
    }
    (min, max)
}
