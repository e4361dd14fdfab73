//! ROM (rope image) loading
//!
//! A rope image is a flat run of big-endian 16-bit values with no header.
//! Each value is masked to 15 bits and stored into fixed memory in order:
//! F0 offset 0, F0 offset 1, ..., F1 offset 0, ... A trailing odd byte is
//! discarded, and anything past the 36 banks is ignored.

use crate::error::{Result, RuntimeError};
use crate::memory::Memory;
use agc_spec::layout::FIXED_WORDS;
use agc_spec::word::{normalize, Word};
use std::fs;
use std::path::Path;

/// Decode a rope image into words, capped at the fixed-memory size
pub fn decode_rope(bytes: &[u8]) -> Vec<Word> {
    bytes
        .chunks_exact(2)
        .take(FIXED_WORDS)
        .map(|pair| normalize(Word::from_be_bytes([pair[0], pair[1]])))
        .collect()
}

impl Memory {
    /// Load a rope image from memory. Words not covered by the image keep
    /// their previous contents. Returns the number of words stored.
    pub fn load_rom_bytes(&mut self, bytes: &[u8]) -> usize {
        let words = decode_rope(bytes);
        for (index, &word) in words.iter().enumerate() {
            self.set_fixed_word(index, word);
        }
        if bytes.len() % 2 != 0 {
            tracing::debug!("discarding trailing odd byte of rope image");
        }
        words.len()
    }

    /// Load a rope image file. The file is read completely before fixed
    /// memory is touched, so a failed read leaves memory unchanged.
    pub fn load_rom(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| RuntimeError::RomOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded = self.load_rom_bytes(&bytes);
        tracing::debug!("loaded {} words from {}", loaded, path.display());
        Ok(loaded)
    }
}
