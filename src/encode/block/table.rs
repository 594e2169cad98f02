//! Per-width dispatch for the block codec family.
//!
//! One [`WidthCodec`] entry exists for every bit-width in 0..=32. The
//! entries are monomorphized at build time from the generic pack/unpack
//! bodies, so every width compiles to its own specialized shift/mask code.
//! [`codec_for`] is the only lookup path and the place where an
//! out-of-range width is rejected.

use crate::encode::block::codec::{BLOCK_LEN, pack_width, packed_len, unpack_width};
use crate::utils::error::{ForpackError, Result};

/// Packs a 32-lane block into `out`, which must hold at least
/// `packed_len(bit_width)` bytes.
pub type PackFn = fn(base: u32, values: &[u32; BLOCK_LEN], out: &mut [u8]);

/// Unpacks a 32-lane block from `input`, which must hold at least
/// `packed_len(bit_width)` bytes.
pub type UnpackFn = fn(base: u32, input: &[u8], out: &mut [u32; BLOCK_LEN]);

/// A pack/unpack function pair specialized for one bit-width.
///
/// The function pointers are total over their documented preconditions;
/// buffer sizing and width validation happen in the safe wrappers below,
/// never inside the pair.
pub struct WidthCodec {
    pub bit_width: u32,
    pub pack: PackFn,
    pub unpack: UnpackFn,
}

macro_rules! width_table {
    ($($b:literal),+ $(,)?) => {
        [$(
            WidthCodec {
                bit_width: $b,
                pack: pack_width::<$b>,
                unpack: unpack_width::<$b>,
            },
        )+]
    };
}

/// The 33-entry dispatch table, indexed by bit-width.
pub static WIDTH_TABLE: [WidthCodec; 33] = width_table![
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32,
];

/// Looks up the codec pair for `bit_width`, rejecting widths above 32.
#[inline]
pub fn codec_for(bit_width: u32) -> Result<&'static WidthCodec> {
    WIDTH_TABLE
        .get(bit_width as usize)
        .ok_or(ForpackError::InvalidBitWidth(bit_width))
}

/// Packs one block into a freshly allocated buffer of exactly
/// `packed_len(bit_width)` bytes.
///
/// Deltas wider than `bit_width` bits are silently truncated to their low
/// bits; see [`pack_checked`] to reject them instead.
pub fn pack(bit_width: u32, base: u32, values: &[u32; BLOCK_LEN]) -> Result<Vec<u8>> {
    let codec = codec_for(bit_width)?;
    let mut out = vec![0u8; packed_len(bit_width)];
    (codec.pack)(base, values, &mut out);
    Ok(out)
}

/// Like [`pack`], but fails on the first delta that does not fit in
/// `bit_width` bits instead of truncating it.
pub fn pack_checked(bit_width: u32, base: u32, values: &[u32; BLOCK_LEN]) -> Result<Vec<u8>> {
    let codec = codec_for(bit_width)?;
    if bit_width < 32 {
        let limit = (1u64 << bit_width) - 1;
        for (lane, &value) in values.iter().enumerate() {
            let delta = value.wrapping_sub(base);
            if delta as u64 > limit {
                return Err(ForpackError::DeltaOverflow {
                    lane,
                    delta,
                    bit_width,
                });
            }
        }
    }
    let mut out = vec![0u8; packed_len(bit_width)];
    (codec.pack)(base, values, &mut out);
    Ok(out)
}

/// Unpacks one block from `input`, which must hold at least
/// `packed_len(bit_width)` bytes.
pub fn unpack(bit_width: u32, base: u32, input: &[u8]) -> Result<[u32; BLOCK_LEN]> {
    let codec = codec_for(bit_width)?;
    let required = packed_len(bit_width);
    if input.len() < required {
        return Err(ForpackError::InsufficientInput {
            required,
            actual: input.len(),
        });
    }
    let mut out = [0u32; BLOCK_LEN];
    (codec.unpack)(base, input, &mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_widths_match_indices() {
        assert_eq!(WIDTH_TABLE.len(), 33);
        for (i, entry) in WIDTH_TABLE.iter().enumerate() {
            assert_eq!(entry.bit_width, i as u32);
        }
    }

    #[test]
    fn test_codec_for_rejects_out_of_range() {
        assert!(codec_for(32).is_ok());
        assert!(matches!(
            codec_for(33),
            Err(ForpackError::InvalidBitWidth(33))
        ));
        assert!(matches!(
            codec_for(u32::MAX),
            Err(ForpackError::InvalidBitWidth(u32::MAX))
        ));
    }

    #[test]
    fn test_pack_output_length() {
        let values = [0u32; BLOCK_LEN];
        for b in 0..=32 {
            let packed = pack(b, 0, &values).unwrap();
            assert_eq!(packed.len(), packed_len(b));
        }
    }

    #[test]
    fn test_unpack_rejects_short_input() {
        let err = unpack(16, 0, &[0u8; packed_len(16) - 1]).unwrap_err();
        assert_eq!(
            err,
            ForpackError::InsufficientInput {
                required: 64,
                actual: 63
            }
        );
    }

    #[test]
    fn test_pack_checked_rejects_wide_delta() {
        let mut values = [0u32; BLOCK_LEN];
        values[3] = 256;
        let err = pack_checked(8, 0, &values).unwrap_err();
        assert_eq!(
            err,
            ForpackError::DeltaOverflow {
                lane: 3,
                delta: 256,
                bit_width: 8
            }
        );

        values[3] = 255;
        assert!(pack_checked(8, 0, &values).is_ok());
    }

    #[test]
    fn test_pack_checked_full_width_accepts_all() {
        let values = [u32::MAX; BLOCK_LEN];
        assert!(pack_checked(32, 0, &values).is_ok());
    }
}
