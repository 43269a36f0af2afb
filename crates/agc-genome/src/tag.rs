//! Tag alphabet for compiled genomes.

use serde::{Deserialize, Serialize};

/// One symbolic processing stage, representable in 2 bits.
///
/// The alphabet is closed: the packed artifact encodes nothing but these
/// four codes, and there is no extension mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tag {
    Void = 0,
    Ingest = 1,
    Mutate = 2,
    Emit = 3,
}

impl Tag {
    /// The 2-bit wire code for this tag.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Decodes a 2-bit code. Only the low two bits are inspected, so this
    /// is total over `u8`.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Tag::Void,
            1 => Tag::Ingest,
            2 => Tag::Mutate,
            _ => Tag::Emit,
        }
    }
}
