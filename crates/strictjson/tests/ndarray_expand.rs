use strictjson::{Decoded, Dtype, Elements, NdArray, NormalizeOptions, Value, normalize};

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().map(|&i| Value::Int(i)).collect()
}

#[test]
fn small_array_expands_fully() {
    let input = Decoded::Array(NdArray::from_i64(vec![5], vec![1, 2, 3, 4, 5]));
    let out = normalize(&input, &NormalizeOptions::default());
    assert_eq!(out, Value::Array(ints(&[1, 2, 3, 4, 5])));
}

#[test]
fn two_dimensional_array_nests_row_major() {
    let input = Decoded::Array(NdArray::from_i64(vec![2, 3], vec![0, 1, 2, 3, 4, 5]));
    let out = normalize(&input, &NormalizeOptions::default());
    assert_eq!(
        out,
        Value::Array(vec![
            Value::Array(ints(&[0, 1, 2])),
            Value::Array(ints(&[3, 4, 5])),
        ])
    );
}

#[test]
fn column_major_array_is_gathered_before_expansion() {
    // Logical [[1,2,3],[4,5,6]] stored column-major: strides [1, 2].
    let array = NdArray::with_strides(
        Dtype::Int64,
        vec![2, 3],
        vec![1, 2],
        Elements::Int(vec![1, 4, 2, 5, 3, 6]),
    );
    assert!(!array.is_row_major());
    let out = normalize(&Decoded::Array(array), &NormalizeOptions::default());
    assert_eq!(
        out,
        Value::Array(vec![
            Value::Array(ints(&[1, 2, 3])),
            Value::Array(ints(&[4, 5, 6])),
        ])
    );
}

#[test]
fn zero_dimensional_array_collapses_to_scalar() {
    let input = Decoded::Array(NdArray::from_f64(vec![], vec![2.5]));
    let out = normalize(&input, &NormalizeOptions::default());
    assert_eq!(out, Value::Float(2.5));
}

#[test]
fn zero_length_axis_produces_empty_rows() {
    let input = Decoded::Array(NdArray::from_i64(vec![2, 0], vec![]));
    let out = normalize(&input, &NormalizeOptions::default());
    assert_eq!(
        out,
        Value::Array(vec![Value::Array(vec![]), Value::Array(vec![])])
    );
}

#[test]
fn non_finite_elements_become_null_in_expansion() {
    let input = Decoded::Array(NdArray::from_f64(
        vec![3],
        vec![1.0, f64::NAN, f64::NEG_INFINITY],
    ));
    let out = normalize(&input, &NormalizeOptions::default());
    assert_eq!(
        out,
        Value::Array(vec![Value::Float(1.0), Value::Null, Value::Null])
    );
}

#[test]
fn threshold_boundary_is_strictly_greater_than() {
    let options = NormalizeOptions {
        elem_threshold: 6,
        ..NormalizeOptions::default()
    };

    let at_threshold = Decoded::Array(NdArray::from_i64(vec![6], vec![0; 6]));
    assert!(matches!(
        normalize(&at_threshold, &options),
        Value::Array(_)
    ));

    let over_threshold = Decoded::Array(NdArray::from_i64(vec![7], vec![0; 7]));
    assert!(matches!(
        normalize(&over_threshold, &options),
        Value::ArraySummary(_)
    ));
}

#[test]
fn summarization_can_be_disabled() {
    let options = NormalizeOptions {
        summarize_large: false,
        elem_threshold: 2,
        ..NormalizeOptions::default()
    };
    let input = Decoded::Array(NdArray::from_i64(vec![5], vec![1, 2, 3, 4, 5]));
    assert_eq!(
        normalize(&input, &options),
        Value::Array(ints(&[1, 2, 3, 4, 5]))
    );
}

#[test]
fn bool_arrays_expand_to_bools() {
    let input = Decoded::Array(NdArray::from_bool(vec![2], vec![true, false]));
    let out = normalize(&input, &NormalizeOptions::default());
    assert_eq!(out, Value::Array(vec![Value::Bool(true), Value::Bool(false)]));
}
