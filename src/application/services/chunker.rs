//! Fixed-size text chunking for remote API payload limits.
//!
//! Chunks are contiguous, non-overlapping and order-preserving:
//! concatenating them reproduces the input exactly. Splits always land
//! on char boundaries, so a chunk may be shorter than `max_len` bytes
//! but never longer than `max_len` characters.

use crate::domain::Chunk;

pub const DEFAULT_CHUNK_LEN: usize = 500;

/// Split `text` into chunks of at most `max_len` characters each.
/// Empty input yields no chunks; input shorter than `max_len` yields
/// exactly one.
pub fn chunk_text(text: &str, max_len: usize) -> Vec<Chunk> {
    assert!(max_len > 0, "chunk length must be positive");

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut char_count = 0;

    for (byte_idx, _) in text.char_indices() {
        if char_count == max_len {
            chunks.push(Chunk::new(chunks.len(), start, &text[start..byte_idx]));
            start = byte_idx;
            char_count = 0;
        }
        char_count += 1;
    }

    if start < text.len() {
        chunks.push(Chunk::new(chunks.len(), start, &text[start..]));
    }

    chunks
}
