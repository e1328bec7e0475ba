use crate::consts::WORD_BITS;

/// Position of the highest set bit of `n`, i.e. `floor(log2(n))`.
/// Returns `-1` for `n == 0`.
///
/// Binary search over the bit width (16, 8, 4, 2, 1) instead of a leading-zero count,
/// so the result does not depend on the target having such an instruction.
pub const fn log2_floor(mut n: u32) -> i32 {
    let mut i = -((n == 0) as i32);
    if n >= 1 << 16 {
        i += 16;
        n >>= 16;
    }
    if n >= 1 << 8 {
        i += 8;
        n >>= 8;
    }
    if n >= 1 << 4 {
        i += 4;
        n >>= 4;
    }
    if n >= 1 << 2 {
        i += 2;
        n >>= 2;
    }
    if n >= 1 << 1 {
        i += 1;
    }
    i
}

/// Reverses all [`WORD_BITS`] bits of `n`: bit 0 swaps with bit 31, bit 1 with bit 30, ...
///
/// Swaps adjacent bit groups of halving width (16, 8, 4, 2, 1) with fixed masks.
pub const fn reverse_bits(mut n: u32) -> u32 {
    n = (n & 0xFFFF_0000) >> 16 | (n & 0x0000_FFFF) << 16;
    n = (n & 0xFF00_FF00) >> 8 | (n & 0x00FF_00FF) << 8;
    n = (n & 0xF0F0_F0F0) >> 4 | (n & 0x0F0F_0F0F) << 4;
    n = (n & 0xCCCC_CCCC) >> 2 | (n & 0x3333_3333) << 2;
    n = (n & 0xAAAA_AAAA) >> 1 | (n & 0x5555_5555) << 1;
    n
}

/// Reverses only the low `bits` bits of `n`, higher bits are discarded.
/// `bits == 0` yields `0`.
pub const fn reverse_low_bits(n: u32, bits: u32) -> u32 {
    match reverse_bits(n).checked_shr(WORD_BITS - bits) {
        Some(r) => r,
        None => 0,
    }
}
