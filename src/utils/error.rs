use thiserror::Error;

/// Main error type for the forpack library.
///
/// The packing primitives themselves are total functions; every failure
/// surfaces at the dispatch boundary or while framing a sequence container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForpackError {
    /// A bit-width outside the supported 0..=32 range was requested.
    #[error("Invalid bit-width: {0} (supported range is 0..=32)")]
    InvalidBitWidth(u32),

    /// An input buffer was shorter than the encoded form requires.
    #[error("Insufficient input: need {required} bytes, got {actual}")]
    InsufficientInput { required: usize, actual: usize },

    /// A delta did not fit in the requested bit-width (checked packing only).
    #[error("Delta {delta} of lane {lane} does not fit in {bit_width} bits")]
    DeltaOverflow {
        lane: usize,
        delta: u32,
        bit_width: u32,
    },
}

/// A specialized `Result` type for forpack operations.
pub type Result<T> = std::result::Result<T, ForpackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ForpackError::InvalidBitWidth(33).to_string(),
            "Invalid bit-width: 33 (supported range is 0..=32)"
        );

        assert_eq!(
            ForpackError::InsufficientInput {
                required: 16,
                actual: 15
            }
            .to_string(),
            "Insufficient input: need 16 bytes, got 15"
        );

        assert_eq!(
            ForpackError::DeltaOverflow {
                lane: 0,
                delta: 257,
                bit_width: 8
            }
            .to_string(),
            "Delta 257 of lane 0 does not fit in 8 bits"
        );
    }
}
