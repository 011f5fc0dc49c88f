use std::borrow::Cow;

/// Element type label for a homogeneous numeric array, using the numpy-style
/// dtype names the descriptor format carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dtype {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
}

impl Dtype {
    pub fn name(self) -> &'static str {
        match self {
            Dtype::Bool => "bool",
            Dtype::Int8 => "int8",
            Dtype::Int16 => "int16",
            Dtype::Int32 => "int32",
            Dtype::Int64 => "int64",
            Dtype::Uint8 => "uint8",
            Dtype::Uint16 => "uint16",
            Dtype::Uint32 => "uint32",
            Dtype::Uint64 => "uint64",
            Dtype::Float32 => "float32",
            Dtype::Float64 => "float64",
        }
    }
}

/// Flat element storage. Narrow dtypes are widened on construction; the
/// `Dtype` label keeps the original width for the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Elements {
    Bool(Vec<bool>),
    Int(Vec<i64>),
    Uint(Vec<u64>),
    Float(Vec<f64>),
}

impl Elements {
    pub fn len(&self) -> usize {
        match self {
            Elements::Bool(xs) => xs.len(),
            Elements::Int(xs) => xs.len(),
            Elements::Uint(xs) => xs.len(),
            Elements::Float(xs) => xs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Multi-dimensional homogeneous numeric array.
///
/// `strides` are in elements, not bytes. `None` means row-major contiguous;
/// anything else (column-major, transposed views) is gathered into a local
/// row-major copy before flattening or summarization.
#[derive(Debug, Clone, PartialEq)]
pub struct NdArray {
    dtype: Dtype,
    shape: Vec<usize>,
    strides: Option<Vec<usize>>,
    data: Elements,
}

impl NdArray {
    /// Row-major contiguous array. The data length must match the shape's
    /// element count.
    pub fn new(dtype: Dtype, shape: Vec<usize>, data: Elements) -> Self {
        assert_eq!(
            element_count(&shape),
            data.len(),
            "shape does not match data length"
        );
        Self {
            dtype,
            shape,
            strides: None,
            data,
        }
    }

    /// Array with explicit element strides over a flat buffer.
    pub fn with_strides(
        dtype: Dtype,
        shape: Vec<usize>,
        strides: Vec<usize>,
        data: Elements,
    ) -> Self {
        assert_eq!(shape.len(), strides.len(), "strides rank mismatch");
        if shape.iter().all(|&d| d > 0) && !shape.is_empty() {
            let last: usize = shape.iter().zip(&strides).map(|(d, s)| (d - 1) * s).sum();
            assert!(last < data.len(), "strides exceed data length");
        }
        Self {
            dtype,
            shape,
            strides: Some(strides),
            data,
        }
    }

    pub fn from_f64(shape: Vec<usize>, data: Vec<f64>) -> Self {
        Self::new(Dtype::Float64, shape, Elements::Float(data))
    }

    pub fn from_i64(shape: Vec<usize>, data: Vec<i64>) -> Self {
        Self::new(Dtype::Int64, shape, Elements::Int(data))
    }

    pub fn from_bool(shape: Vec<usize>, data: Vec<bool>) -> Self {
        Self::new(Dtype::Bool, shape, Elements::Bool(data))
    }

    pub fn dtype(&self) -> Dtype {
        self.dtype
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total element count; 1 for a zero-dimensional (scalar) array.
    pub fn element_count(&self) -> usize {
        element_count(&self.shape)
    }

    pub fn is_row_major(&self) -> bool {
        match &self.strides {
            None => true,
            Some(s) => *s == row_major_strides(&self.shape),
        }
    }

    /// Flat elements in row-major logical order. Borrows when the array is
    /// already contiguous; otherwise gathers into a scratch copy.
    pub fn to_row_major(&self) -> Cow<'_, Elements> {
        if self.is_row_major() {
            return Cow::Borrowed(&self.data);
        }
        let strides = self
            .strides
            .as_ref()
            .expect("non-row-major array carries strides");
        let gathered = match &self.data {
            Elements::Bool(xs) => Elements::Bool(gather(xs, &self.shape, strides)),
            Elements::Int(xs) => Elements::Int(gather(xs, &self.shape, strides)),
            Elements::Uint(xs) => Elements::Uint(gather(xs, &self.shape, strides)),
            Elements::Float(xs) => Elements::Float(gather(xs, &self.shape, strides)),
        };
        Cow::Owned(gathered)
    }
}

pub(crate) fn element_count(shape: &[usize]) -> usize {
    shape.iter().product()
}

fn row_major_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for axis in (0..shape.len().saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * shape[axis + 1];
    }
    strides
}

/// Walks the multi-index in row-major order (last axis fastest) and picks
/// elements through the stride map.
fn gather<T: Copy>(data: &[T], shape: &[usize], strides: &[usize]) -> Vec<T> {
    let count = element_count(shape);
    let mut out = Vec::with_capacity(count);
    if shape.iter().any(|&d| d == 0) {
        return out;
    }
    let mut index = vec![0usize; shape.len()];
    loop {
        let offset: usize = index.iter().zip(strides).map(|(i, s)| i * s).sum();
        out.push(data[offset]);
        let mut axis = shape.len();
        loop {
            if axis == 0 {
                return out;
            }
            axis -= 1;
            index[axis] += 1;
            if index[axis] < shape[axis] {
                break;
            }
            index[axis] = 0;
        }
    }
}
