//! Frame-of-reference compression of `u32` sequences.
//!
//! The sequence codec is the canonical caller of the block dispatch table:
//! it splits the input into 32-lane blocks, uses each block's minimum as
//! the base and the widest remaining delta to pick the bit-width, then
//! stores both in a small per-block header ahead of the packed words.
//!
//! Container layout: a little-endian `u32` element count, then one record
//! per block: a width byte, the little-endian `u32` base, and
//! `packed_len(width)` packed bytes. A final partial block is padded to 32
//! lanes with its own base, so the padding packs as zero deltas and is
//! dropped on decode via the count header.

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, trace};

use crate::encode::block::{BLOCK_LEN, WIDTH_TABLE, codec_for, packed_len};
use crate::utils::error::{ForpackError, Result};

/// Bytes taken by the element count at the front of the container.
const COUNT_LEN: usize = 4;

/// Bytes taken by each block's width byte plus base word.
const BLOCK_HEADER_LEN: usize = 5;

/// Smallest bit-width that holds `delta`; 0 when the delta is 0.
#[inline]
pub fn bits_needed(delta: u32) -> u32 {
    32 - delta.leading_zeros()
}

/// Compresses a sequence of unsigned 32-bit values.
///
/// Sequences longer than `u32::MAX` elements do not fit the count header.
pub fn compress(values: &[u32]) -> Vec<u8> {
    debug_assert!(values.len() <= u32::MAX as usize);

    let mut out = vec![0u8; COUNT_LEN];
    LittleEndian::write_u32(&mut out, values.len() as u32);

    for (index, chunk) in values.chunks(BLOCK_LEN).enumerate() {
        let mut min = chunk[0];
        let mut max = chunk[0];
        for &value in chunk {
            min = min.min(value);
            max = max.max(value);
        }
        let width = bits_needed(max - min);
        trace!(
            "block {}: base={}, width={}, live lanes={}",
            index,
            min,
            width,
            chunk.len()
        );

        // Dead lanes of a tail block carry the base itself, so padding
        // packs as zero deltas and never widens the block.
        let mut lanes = [min; BLOCK_LEN];
        lanes[..chunk.len()].copy_from_slice(chunk);

        out.push(width as u8);
        let mut base_bytes = [0u8; 4];
        LittleEndian::write_u32(&mut base_bytes, min);
        out.extend_from_slice(&base_bytes);

        let body_start = out.len();
        out.resize(body_start + packed_len(width), 0);
        // bits_needed never exceeds 32, so the table index is in range.
        let entry = &WIDTH_TABLE[width as usize];
        (entry.pack)(min, &lanes, &mut out[body_start..]);
    }

    let bits_per_value = if values.is_empty() {
        0.0
    } else {
        (out.len() - COUNT_LEN) as f64 * 8.0 / values.len() as f64
    };
    debug!(
        "packed {} values into {} bytes ({:.2} bits/value)",
        values.len(),
        out.len(),
        bits_per_value
    );

    out
}

/// Decompresses a container produced by [`compress`].
///
/// Fails with `InsufficientInput` when the buffer ends inside a header or
/// a block body, and with `InvalidBitWidth` when a block header carries a
/// width above 32.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() < COUNT_LEN {
        return Err(ForpackError::InsufficientInput {
            required: COUNT_LEN,
            actual: bytes.len(),
        });
    }
    let count = LittleEndian::read_u32(&bytes[..COUNT_LEN]) as usize;

    // Every 32-lane block costs at least its header, which bounds the
    // buffer length a given count can legitimately claim.
    let min_len = COUNT_LEN + count.div_ceil(BLOCK_LEN) * BLOCK_HEADER_LEN;
    if bytes.len() < min_len {
        return Err(ForpackError::InsufficientInput {
            required: min_len,
            actual: bytes.len(),
        });
    }

    let mut values = Vec::with_capacity(count);
    let mut pos = COUNT_LEN;
    let mut remaining = count;

    while remaining > 0 {
        if bytes.len() < pos + BLOCK_HEADER_LEN {
            return Err(ForpackError::InsufficientInput {
                required: pos + BLOCK_HEADER_LEN,
                actual: bytes.len(),
            });
        }
        let width = bytes[pos] as u32;
        let base = LittleEndian::read_u32(&bytes[pos + 1..pos + BLOCK_HEADER_LEN]);
        pos += BLOCK_HEADER_LEN;

        let entry = codec_for(width)?;
        let body_len = packed_len(width);
        if bytes.len() < pos + body_len {
            return Err(ForpackError::InsufficientInput {
                required: pos + body_len,
                actual: bytes.len(),
            });
        }

        let mut lanes = [0u32; BLOCK_LEN];
        (entry.unpack)(base, &bytes[pos..pos + body_len], &mut lanes);
        pos += body_len;

        let live = remaining.min(BLOCK_LEN);
        values.extend_from_slice(&lanes[..live]);
        remaining -= live;
    }

    trace!("unpacked {} values from {} bytes", count, pos);
    Ok(values)
}
