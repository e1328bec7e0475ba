use crate::consts::{DEFAULT_N_WORKERS, DEFAULT_PAR_THRESHOLD};
use crate::permute::Validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermuteConfig {
    /// Precondition enforcement for single index lookups
    pub validation: Validation,
    /// Minimum table size for which the slots are filled in parallel.
    /// Set to `usize::MAX` to always fill sequentially.
    pub par_threshold: usize,
    /// Number of threads of the local pool used for parallel fills.
    /// Uses rayon's global pool if `None`.
    pub n_workers: Option<usize>,
}

pub const DEFAULT_PERMUTE_CONFIG: PermuteConfig = PermuteConfig {
    validation: Validation::Strict,
    par_threshold: DEFAULT_PAR_THRESHOLD,
    n_workers: Some(DEFAULT_N_WORKERS),
};

impl Default for PermuteConfig {
    fn default() -> Self {
        DEFAULT_PERMUTE_CONFIG
    }
}
