use crate::permute::permute_index;
use crate::table::PermutationTable;
use itertools::Itertools;
use log::warn;

/// Every index of `[0, len)` appears exactly once
pub fn table_is_bijection(indices: &[u32]) -> bool {
    let mut seen = vec![false; indices.len()];
    for &j in indices {
        match seen.get_mut(j as usize) {
            Some(s) if !*s => *s = true,
            _ => {
                warn!("[ASSERT] index {j} out of range or duplicated");
                return false;
            }
        }
    }
    true
}

/// Applying the permutation twice yields the identity
pub fn table_is_involution(indices: &[u32]) -> bool {
    let violations = indices
        .iter()
        .enumerate()
        .filter(|&(i, &j)| indices.get(j as usize).is_none_or(|&k| k as usize != i))
        .map(|(i, _)| i)
        .collect_vec();

    if !violations.is_empty() {
        warn!("[ASSERT] not an involution at indices {:?}", violations);
    }
    violations.is_empty()
}

/// The table holds exactly the values of `permute_index` for its size
pub fn table_matches_fresh_table(table: &PermutationTable) -> bool {
    let size = table.size();
    table.len() == size as usize
        && table
            .iter()
            .enumerate()
            .all(|(i, j)| permute_index(size, i as u32) == j)
}
