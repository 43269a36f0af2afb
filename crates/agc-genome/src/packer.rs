//! Bit packing of tag streams.
//!
//! Four tags per byte, first tag in the two most significant bits. A final
//! partial group is zero-padded in its unused low bits and still emitted,
//! so the body is always `ceil(tags / 4)` bytes.

use crate::tag::Tag;

/// Packs a tag stream into bytes, MSB-first.
///
/// Deterministic and stateless; an empty stream packs to an empty body.
pub fn pack(tags: &[Tag]) -> Vec<u8> {
    tags.chunks(4)
        .map(|group| {
            group
                .iter()
                .enumerate()
                .fold(0u8, |byte, (slot, tag)| byte | tag.bits() << (6 - 2 * slot))
        })
        .collect()
}
