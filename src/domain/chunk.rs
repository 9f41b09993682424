/// A bounded-length contiguous slice of a larger text, used to respect
/// remote API payload limits. Chunks never overlap; concatenated in
/// order they reproduce the original text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Zero-based position in the chunk sequence.
    pub index: usize,
    /// Byte offset of the chunk start within the original text.
    pub offset: usize,
    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, offset: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            offset,
            text: text.into(),
        }
    }
}
