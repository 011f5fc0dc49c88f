#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Replace over-threshold arrays with a summary descriptor instead of
    /// expanding them.
    pub summarize_large: bool,
    /// Arrays with MORE than this many elements are summarized; an array
    /// with exactly this many elements is still expanded.
    pub elem_threshold: usize,
    /// Number of leading elements carried in a summary's sample.
    pub sample_n: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            summarize_large: true,
            elem_threshold: 20_000,
            sample_n: 10,
        }
    }
}
