use crate::config::PermuteConfig;
use crate::consts::MAX_LOG_SIZE;
use crate::error::PermuteError;
use crate::permute::{check_size, permute_index};
use crate::util::assertions::{table_is_bijection, table_is_involution};
use crate::util::bit_reversal_iterator::BitReversalIterator;
use anyhow::Result;
use log::{debug, trace};
use rayon::ThreadPool;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::Serialize;
use std::ops::Index;
use tap::Tap;

/// Precomputed bit-reversal permutation of a power-of-two index space.
/// Slot `i` holds `permute_index(size, i)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermutationTable {
    size: u32,
    log_size: u32,
    indices: Vec<u32>,
}

impl PermutationTable {
    /// Fills the table sequentially
    pub fn new(size: u32) -> Result<Self, PermuteError> {
        let log_size = check_size(size)?;
        let indices = BitReversalIterator::new(size).collect();
        Ok(Self::from_parts(size, log_size, indices))
    }

    pub fn from_log2(log_size: u32) -> Result<Self, PermuteError> {
        if log_size > MAX_LOG_SIZE {
            return Err(PermuteError::SizeTooLarge { log_size });
        }
        Self::new(1 << log_size)
    }

    /// Fills the table in parallel on the current rayon pool, every slot is independent
    pub fn par_new(size: u32) -> Result<Self, PermuteError> {
        let log_size = check_size(size)?;
        let indices = (0..size)
            .into_par_iter()
            .map(|i| permute_index(size, i))
            .collect();
        Ok(Self::from_parts(size, log_size, indices))
    }

    fn from_parts(size: u32, log_size: u32, indices: Vec<u32>) -> Self {
        Self {
            size,
            log_size,
            indices,
        }
        .tap(|t| {
            debug_assert!(t.indices.len() == t.size as usize);
            debug_assert!(table_is_bijection(&t.indices));
            debug_assert!(table_is_involution(&t.indices));
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn log_size(&self) -> u32 {
        self.log_size
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn get(&self, index: u32) -> Option<u32> {
        self.indices.get(index as usize).copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    /// Reorders `data` in place into bit-reversed order.
    /// Each pair is swapped once, from the lower of its two positions.
    pub fn apply<T>(&self, data: &mut [T]) -> Result<(), PermuteError> {
        if data.len() != self.indices.len() {
            return Err(PermuteError::LengthMismatch {
                expected: self.indices.len(),
                actual: data.len(),
            });
        }
        for (i, &j) in self.indices.iter().enumerate() {
            let j = j as usize;
            if i < j {
                data.swap(i, j);
            }
        }
        Ok(())
    }
}

impl Index<u32> for PermutationTable {
    type Output = u32;

    fn index(&self, index: u32) -> &Self::Output {
        &self.indices[index as usize]
    }
}

/// Reorders `data` in place into bit-reversed order without building a table.
/// The length of `data` must be a power of two.
pub fn bit_reverse_permute<T>(data: &mut [T]) -> Result<(), PermuteError> {
    let size = u32::try_from(data.len()).map_err(|_| PermuteError::SizeTooLarge {
        log_size: data.len().ilog2(),
    })?;
    check_size(size)?;
    for i in 0..size {
        let j = permute_index(size, i);
        if i < j {
            data.swap(i as usize, j as usize);
        }
    }
    Ok(())
}

/// Builds tables, switching to a parallel fill for large sizes
pub struct TableBuilder {
    pub config: PermuteConfig,
    pub thread_pool: Option<ThreadPool>,
}

impl TableBuilder {
    pub fn new(config: PermuteConfig) -> Result<Self> {
        let thread_pool = match config.n_workers {
            // On wasm32, only the global thread pool is available
            _ if cfg!(target_arch = "wasm32") => None,
            None => None,
            Some(n_workers) => {
                debug!("[TABLE] creating local thread pool with {n_workers} workers");
                Some(
                    rayon::ThreadPoolBuilder::new()
                        .num_threads(n_workers)
                        .thread_name(|i| format!("perm-{i}"))
                        .build()?,
                )
            }
        };
        Ok(Self {
            config,
            thread_pool,
        })
    }

    pub fn build(&self, size: u32) -> Result<PermutationTable, PermuteError> {
        if size as usize >= self.config.par_threshold {
            debug!("[TABLE] filling {size} slots in parallel");
            match &self.thread_pool {
                Some(pool) => pool.install(|| PermutationTable::par_new(size)),
                None => PermutationTable::par_new(size),
            }
        } else {
            trace!("[TABLE] filling {size} slots sequentially");
            PermutationTable::new(size)
        }
    }

    pub fn build_log2(&self, log_size: u32) -> Result<PermutationTable, PermuteError> {
        if log_size > MAX_LOG_SIZE {
            return Err(PermuteError::SizeTooLarge { log_size });
        }
        self.build(1 << log_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_PERMUTE_CONFIG;
    use crate::util::assertions::table_matches_fresh_table;
    use itertools::Itertools;

    #[test]
    fn sequential_and_parallel_agree() {
        for k in 0..=14 {
            let seq = PermutationTable::from_log2(k).unwrap();
            let par = PermutationTable::par_new(1 << k).unwrap();
            assert_eq!(seq, par);
            assert!(table_matches_fresh_table(&seq));
        }
    }

    #[test]
    fn accessors() {
        let table = PermutationTable::new(8).unwrap();
        assert_eq!(table.size(), 8);
        assert_eq!(table.log_size(), 3);
        assert_eq!(table.len(), 8);
        assert!(!table.is_empty());
        assert_eq!(table[1], 4);
        assert_eq!(table.get(6), Some(3));
        assert_eq!(table.get(8), None);
        assert_eq!(table.as_slice(), &[0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn rejects_invalid_sizes() {
        assert_eq!(PermutationTable::new(0), Err(PermuteError::ZeroSize));
        assert_eq!(
            PermutationTable::par_new(24),
            Err(PermuteError::NotPowerOfTwo { size: 24 })
        );
        assert_eq!(
            PermutationTable::from_log2(32),
            Err(PermuteError::SizeTooLarge { log_size: 32 })
        );
    }

    #[test]
    fn apply_reorders_and_restores() {
        let table = PermutationTable::new(8).unwrap();
        let mut data = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
        table.apply(&mut data).unwrap();
        assert_eq!(data, ['a', 'e', 'c', 'g', 'b', 'f', 'd', 'h']);
        table.apply(&mut data).unwrap();
        assert_eq!(data, ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h']);
    }

    #[test]
    fn apply_rejects_wrong_length() {
        let table = PermutationTable::new(4).unwrap();
        let mut data = [0u8; 5];
        assert_eq!(
            table.apply(&mut data),
            Err(PermuteError::LengthMismatch {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn permute_without_table() {
        let mut data = (0..16u32).collect_vec();
        bit_reverse_permute(&mut data).unwrap();
        assert_eq!(data, PermutationTable::new(16).unwrap().as_slice());

        let mut empty: [u8; 0] = [];
        assert_eq!(bit_reverse_permute(&mut empty), Err(PermuteError::ZeroSize));
        let mut odd = [1, 2, 3];
        assert_eq!(
            bit_reverse_permute(&mut odd),
            Err(PermuteError::NotPowerOfTwo { size: 3 })
        );
    }

    #[test]
    fn builder_switches_strategy() {
        let config = PermuteConfig {
            par_threshold: 64,
            n_workers: Some(2),
            ..DEFAULT_PERMUTE_CONFIG
        };
        let builder = TableBuilder::new(config).unwrap();
        assert!(builder.thread_pool.is_some());
        for k in [0, 3, 6, 10] {
            let table = builder.build_log2(k).unwrap();
            assert_eq!(table, PermutationTable::from_log2(k).unwrap());
        }
        assert!(builder.build(100).is_err());
        assert!(builder.build_log2(40).is_err());
    }

    #[test]
    fn builder_on_global_pool() {
        let config = PermuteConfig {
            par_threshold: 1,
            n_workers: None,
            ..DEFAULT_PERMUTE_CONFIG
        };
        let builder = TableBuilder::new(config).unwrap();
        assert!(builder.thread_pool.is_none());
        assert_eq!(builder.build(4).unwrap().as_slice(), &[0, 2, 1, 3]);
    }
}
