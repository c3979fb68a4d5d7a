use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::store::TransactionStore;
use crate::types::{ItemId, Itemset, ItemsetCounts, SupportCount};

/// Count, in one pass over the transactions, how many transactions contain
/// each candidate as a subset.
///
/// All candidates must be of the same size. Every candidate appears in the
/// returned map, zero counts included; filtering by threshold is
/// [`filter_frequent`]'s job.
///
/// The scan is partitioned over transactions and the partial counts are
/// summed per candidate, which cannot change the totals.
pub fn count_supports(candidates: &[Itemset], store: &TransactionStore) -> ItemsetCounts {
    if candidates.is_empty() {
        return HashMap::new();
    }

    let size = candidates[0].len();
    debug_assert!(candidates.iter().all(|candidate| candidate.len() == size));

    let counts: HashMap<&Itemset, SupportCount> = store
        .transactions()
        .par_iter()
        .fold(HashMap::new, |mut counts: HashMap<&Itemset, SupportCount>, transaction| {
            // Transactions shorter than the candidates cannot contain them.
            if transaction.len() < size {
                return counts;
            }

            let lookup: HashSet<ItemId> = transaction.iter().copied().collect();
            for candidate in candidates {
                if candidate.iter().all(|item| lookup.contains(item)) {
                    *counts.entry(candidate).or_insert(0) += 1;
                }
            }
            counts
        })
        .reduce(HashMap::new, |mut merged, partial| {
            for (candidate, count) in partial {
                *merged.entry(candidate).or_insert(0) += count;
            }
            merged
        });

    candidates
        .iter()
        .map(|candidate| {
            let count = counts.get(candidate).copied().unwrap_or(0);
            (candidate.clone(), count)
        })
        .collect()
}

/// Keep only the itemsets whose count meets the resolved threshold.
pub fn filter_frequent(mut counts: ItemsetCounts, min_support_count: usize) -> ItemsetCounts {
    counts.retain(|_, &mut support_count| support_count as usize >= min_support_count);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    fn store(raw: &[Vec<&str>]) -> TransactionStore {
        TransactionStore::new(raw).unwrap()
    }

    #[test]
    fn counts_singletons() {
        let store = store(&[vec!["10", "11", "13"], vec!["10"]]);
        let candidates = vec![vec![0], vec![1]];

        let counts = count_supports(&candidates, &store);

        assert_eq!(counts, hashmap! { vec![0] => 2, vec![1] => 1 });
    }

    #[test]
    fn unmatched_candidates_keep_zero_counts() {
        let store = store(&[vec!["10", "11"], vec!["10", "13"]]);
        // "11" and "13" never co-occur.
        let candidates = vec![vec![0, 1], vec![0, 2], vec![1, 2]];

        let counts = count_supports(&candidates, &store);

        assert_eq!(
            counts,
            hashmap! { vec![0, 1] => 1, vec![0, 2] => 1, vec![1, 2] => 0 }
        );
    }

    #[test]
    fn counts_pairs_across_transactions() {
        let store = store(&[
            vec!["10", "11"],
            vec!["10", "15"],
            vec!["10", "13"],
            vec!["10", "13"],
            vec!["10", "13"],
            vec!["11", "13"],
        ]);
        // ids: 10 -> 0, 11 -> 1, 15 -> 2, 13 -> 3
        let candidates = vec![vec![0, 1], vec![0, 3], vec![1, 3]];

        let counts = count_supports(&candidates, &store);

        assert_eq!(
            counts,
            hashmap! { vec![0, 1] => 1, vec![0, 3] => 3, vec![1, 3] => 1 }
        );
    }

    #[test]
    fn short_transactions_are_skipped() {
        let store = store(&[vec!["10", "11", "13"], vec!["10"]]);
        let candidates = vec![vec![0, 1]];

        let counts = count_supports(&candidates, &store);

        assert_eq!(counts, hashmap! { vec![0, 1] => 1 });
    }

    #[test]
    fn no_candidates_yields_empty_counts() {
        let store = store(&[vec!["10", "11"]]);
        assert!(count_supports(&[], &store).is_empty());
    }

    #[test]
    fn filter_retains_counts_at_threshold() {
        let counts = hashmap! {
            vec![0] => 5,
            vec![1] => 3,
            vec![2] => 2,
        };

        let frequent = filter_frequent(counts, 3);

        assert_eq!(frequent, hashmap! { vec![0] => 5, vec![1] => 3 });
    }

    #[test]
    fn filter_can_empty_the_level() {
        let counts = hashmap! { vec![0, 1] => 1 };
        assert!(filter_frequent(counts, 2).is_empty());
    }
}
