//! # forpack
//!
//! A small frame-of-reference integer packing library. The core primitive
//! packs a fixed block of 32 unsigned 32-bit integers, minus a shared base,
//! into the smallest whole number of little-endian 64-bit words that holds
//! `32 * bit_width` bits, and unpacks the exact inverse.
//!
//! This library is organized into a few modules:
//! - `utils`: Error handling shared by every codec path
//! - `wire`: Explicit little-endian word access over byte buffers
//! - `encode`: The fixed-width block codec family and the sequence codec
//!   layered on top of it
//!
//! The encoded block format carries no header: the bit-width travels
//! out-of-band (for example in the sequence container's per-block header),
//! and the caller picks it per block, typically from the widest delta the
//! block contains.

// Re-export commonly used types at the crate root
pub use utils::error::{ForpackError, Result};

// Core modules
pub mod utils {
    pub mod error;
}

pub mod wire {
    pub mod words;
}

pub mod encode {
    pub mod block {
        pub mod codec;
        pub mod table;

        // Re-export the sizing functions, the table and the safe wrappers
        pub use self::codec::*;
        pub use self::table::*;
    }

    pub mod sequence;
}

// Public API exports
pub use encode::block::{
    BLOCK_LEN, MAX_BIT_WIDTH, byte_count, codec_for, pack, pack_checked, packed_len, unpack,
    word_count,
};
pub use encode::sequence::{compress, decompress};
