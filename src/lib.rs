//! Bit-reversal permutation indices for in-place, decimation-in-time radix-2 transforms.
//!
//! [`permute_index`] maps a linear index of a power-of-two sized array to the position it
//! takes in bit-reversed order. [`PermutationTable`] precomputes that mapping once per size.

use std::sync::LazyLock;
use std::time::Instant;

pub mod bits;
pub mod config;
pub mod consts;
pub mod error;
pub mod permute;
pub mod table;
pub mod util;

pub use bits::{log2_floor, reverse_bits};
pub use config::*;
pub use error::PermuteError;
pub use permute::{Validation, permute_index, try_permute_index};
pub use table::{PermutationTable, TableBuilder, bit_reverse_permute};

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
