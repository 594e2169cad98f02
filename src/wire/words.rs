//! Little-endian 64-bit word access over byte buffers.
//!
//! The encoded block format is defined as consecutive 64-bit words, each
//! stored little-endian, so the codec never reinterprets raw memory. All
//! word traffic goes through these two routines, keeping the in-memory
//! representation decoupled from the bit arithmetic.

use byteorder::{ByteOrder, LittleEndian};

/// Reads the `index`-th little-endian 64-bit word of `buf`.
///
/// Panics if `buf` does not contain `(index + 1) * 8` bytes; callers size
/// buffers with `word_count` before touching them.
#[inline]
pub fn read_word(buf: &[u8], index: usize) -> u64 {
    LittleEndian::read_u64(&buf[index * 8..(index + 1) * 8])
}

/// Writes `word` as the `index`-th little-endian 64-bit word of `buf`.
///
/// Panics if `buf` does not contain `(index + 1) * 8` bytes.
#[inline]
pub fn write_word(buf: &mut [u8], index: usize, word: u64) {
    LittleEndian::write_u64(&mut buf[index * 8..(index + 1) * 8], word);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_byte_order() {
        let mut buf = [0u8; 16];
        write_word(&mut buf, 0, 0x0102_0304_0506_0708);
        write_word(&mut buf, 1, u64::MAX);

        // Least significant byte first within each word.
        assert_eq!(&buf[..8], &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&buf[8..], &[0xFF; 8]);

        assert_eq!(read_word(&buf, 0), 0x0102_0304_0506_0708);
        assert_eq!(read_word(&buf, 1), u64::MAX);
    }
}
