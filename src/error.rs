//! Invalid-argument errors returned by the validated operations.

use crate::consts::MAX_LOG_SIZE;
use std::error::Error;
use std::fmt;

/// Precondition violations of a bit-reversal permutation.
///
/// Every variant is an invalid-argument condition: the caller passed a size, index or
/// buffer that does not describe a power-of-two index space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PermuteError {
    /// The size was zero.
    ZeroSize,
    /// The size was not a power of two.
    NotPowerOfTwo {
        /// The rejected size.
        size: u32,
    },
    /// The requested size `2^log_size` does not fit the word width.
    SizeTooLarge {
        /// Base-two logarithm of the requested size.
        log_size: u32,
    },
    /// The index did not lie in `[0, size)`.
    IndexOutOfRange {
        /// Size of the index space.
        size: u32,
        /// The rejected index.
        index: u32,
    },
    /// A slice did not have the length of the permutation applied to it.
    LengthMismatch {
        /// Length of the permutation.
        expected: usize,
        /// Length of the slice.
        actual: usize,
    },
}

impl fmt::Display for PermuteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "size must be positive"),
            Self::NotPowerOfTwo { size } => write!(f, "size {size} is not a power of two"),
            Self::SizeTooLarge { log_size } => {
                write!(f, "size 2^{log_size} exceeds the maximum of 2^{MAX_LOG_SIZE}")
            }
            Self::IndexOutOfRange { size, index } => {
                write!(f, "index {index} out of range for size {size}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "slice of length {actual} does not match permutation of size {expected}")
            }
        }
    }
}

impl Error for PermuteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        assert_eq!(PermuteError::ZeroSize.to_string(), "size must be positive");
        assert_eq!(
            PermuteError::NotPowerOfTwo { size: 6 }.to_string(),
            "size 6 is not a power of two"
        );
        assert_eq!(
            PermuteError::SizeTooLarge { log_size: 40 }.to_string(),
            "size 2^40 exceeds the maximum of 2^31"
        );
        assert_eq!(
            PermuteError::IndexOutOfRange { size: 8, index: 9 }.to_string(),
            "index 9 out of range for size 8"
        );
        assert_eq!(
            PermuteError::LengthMismatch { expected: 8, actual: 7 }.to_string(),
            "slice of length 7 does not match permutation of size 8"
        );
    }
}
