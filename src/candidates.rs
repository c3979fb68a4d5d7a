use std::collections::HashSet;

use itertools::Itertools;

use crate::types::{ItemId, Itemset, ItemsetCounts};

/// Generate the size-(k+1) candidates from the frequent size-k itemsets.
///
/// Join step: every union of a frequent itemset with one more frequent item,
/// deduplicated in canonical (sorted) form. Prune step: a candidate survives
/// only if every one of its size-k subsets is frequent — anything else
/// cannot be frequent itself and would only bloat the next counting pass.
///
/// The output is sorted, so a given frequent set always produces the same
/// candidate order.
pub fn generate_candidates(frequent: &ItemsetCounts) -> Vec<Itemset> {
    if frequent.is_empty() {
        return vec![];
    }

    let size = frequent.keys().next().map_or(0, Vec::len);

    // Distinct items appearing in any frequent itemset at this level.
    let mut items: Vec<ItemId> = frequent.keys().flatten().copied().collect();
    items.sort_unstable();
    items.dedup();

    let mut candidates: HashSet<Itemset> = HashSet::new();

    if size == 1 {
        // All pairs of frequent items; `items` is sorted, so each pair is
        // already canonical.
        for pair in items.iter().combinations(2) {
            candidates.insert(pair.into_iter().copied().collect());
        }
    } else {
        for itemset in frequent.keys() {
            for &item in &items {
                if itemset.binary_search(&item).is_err() {
                    let mut candidate = Vec::with_capacity(size + 1);
                    candidate.extend_from_slice(itemset);
                    candidate.push(item);
                    candidate.sort_unstable();
                    candidates.insert(candidate);
                }
            }
        }
    }

    let mut candidates: Vec<Itemset> = candidates
        .into_iter()
        .filter(|candidate| all_subsets_frequent(candidate, frequent))
        .collect();
    candidates.sort_unstable();
    candidates
}

fn all_subsets_frequent(candidate: &Itemset, frequent: &ItemsetCounts) -> bool {
    let mut subset = Vec::with_capacity(candidate.len() - 1);
    (0..candidate.len()).all(|skip| {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(position, _)| position != skip)
                .map(|(_, &item)| item),
        );
        frequent.contains_key(&subset)
    })
}
