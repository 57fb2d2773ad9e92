//! Char/byte offset mapping.
//!
//! Public APIs in this crate take and return **character offsets** (Unicode scalar values).
//! [`OffsetMap`] is the bridge between that index space and `&str` byte indexing; it is also
//! used by the extraction crate to convert regex match ranges (bytes) back to char offsets.

/// Precomputed char-offset to byte-offset mapping for one text snapshot.
#[derive(Debug, Clone)]
pub struct OffsetMap {
    /// Byte offset of each char, plus a trailing `text.len()` sentinel.
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl OffsetMap {
    /// Build the mapping for `text`.
    pub fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    /// Number of characters in the mapped text.
    pub fn char_len(&self) -> usize {
        self.char_to_byte.len() - 1
    }

    /// Convert a char offset to a byte offset, clamping past-the-end input.
    pub fn byte_at(&self, char_offset: usize) -> usize {
        let clamped = char_offset.min(self.char_len());
        self.char_to_byte[clamped]
    }

    /// Convert a byte offset back to a char offset.
    ///
    /// Byte offsets produced by pattern matches always land on a char boundary; offsets past
    /// the end clamp to the char count.
    pub fn char_at_byte(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }
}
