use crate::bits::{log2_floor, reverse_bits};
use crate::consts::WORD_BITS;
use crate::error::PermuteError;

/// Bit-reversed position of `index` in an index space of `size` elements.
/// Example: for `size = 8` the indices `0..8` map to `0, 4, 2, 6, 1, 5, 3, 7`.
///
/// The full word of `index` is reversed and then shifted right so that only the
/// top `log2(size)` bits survive, which are the low `log2(size)` bits of `index` in reverse order.
///
/// No validation: for a `size` that is not a power of two the result is well defined but
/// not a permutation, and an `index >= size` has its excess bits discarded.
/// Shifts of a full word or more (`size <= 1`) yield `0`.
pub const fn permute_index(size: u32, index: u32) -> u32 {
    let shift = (WORD_BITS as i32 - log2_floor(size)) as u32;
    match reverse_bits(index).checked_shr(shift) {
        Some(r) => r,
        None => 0,
    }
}

/// Checks that `size` is a positive power of two and returns `log2(size)`.
pub fn check_size(size: u32) -> Result<u32, PermuteError> {
    match size {
        0 => Err(PermuteError::ZeroSize),
        s if !s.is_power_of_two() => Err(PermuteError::NotPowerOfTwo { size }),
        s => Ok(log2_floor(s) as u32),
    }
}

pub fn check_args(size: u32, index: u32) -> Result<(), PermuteError> {
    check_size(size)?;
    if index >= size {
        return Err(PermuteError::IndexOutOfRange { size, index });
    }
    Ok(())
}

/// [`permute_index`] with its preconditions enforced.
pub fn try_permute_index(size: u32, index: u32) -> Result<u32, PermuteError> {
    check_args(size, index)?;
    Ok(permute_index(size, index))
}

/// How strictly the preconditions of a permutation lookup are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Violations are returned as errors
    #[default]
    Strict,
    /// Violations panic in debug builds and go unchecked in release builds
    DebugOnly,
    /// No checks, see [`permute_index`] for the resulting values
    Unchecked,
}

pub fn permute_with(validation: Validation, size: u32, index: u32) -> Result<u32, PermuteError> {
    match validation {
        Validation::Strict => try_permute_index(size, index),
        Validation::DebugOnly => {
            debug_assert!(
                check_args(size, index).is_ok(),
                "invalid permutation arguments: size {size}, index {index}"
            );
            Ok(permute_index(size, index))
        }
        Validation::Unchecked => Ok(permute_index(size, index)),
    }
}
