/// Width of the words the permutation is computed over
pub const WORD_BITS: u32 = u32::BITS;

/// Largest `k` for which a table of size `2^k` is representable with `u32` indices
pub const MAX_LOG_SIZE: u32 = WORD_BITS - 1;

/// Tables of at least this many slots are filled in parallel
pub const DEFAULT_PAR_THRESHOLD: usize = 1 << 16;

pub const DEFAULT_N_WORKERS: usize = 4;

pub const LOG_LEVEL_FILTER_RELEASE: log::LevelFilter = log::LevelFilter::Info;

pub const LOG_LEVEL_FILTER_DEBUG: log::LevelFilter = log::LevelFilter::Debug;
