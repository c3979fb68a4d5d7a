use std::collections::HashMap;

use tracing::{debug, info};

use crate::candidates::generate_candidates;
use crate::config::MinerConfig;
use crate::counter::{count_supports, filter_frequent};
use crate::error::{MiningError, Result};
use crate::store::TransactionStore;
use crate::types::{FrequentItemsets, Itemset, ItemsetCounts, ItemsetLength, SupportCount};

/// Everything one mining run produced: the frequent itemsets per size, the
/// threshold they were filtered with, and the transaction total it was
/// resolved against.
#[derive(Debug, Clone, PartialEq)]
pub struct MiningResult {
    levels: FrequentItemsets,
    min_support_count: usize,
    num_transactions: usize,
}

impl MiningResult {
    /// Frequent itemsets grouped by size. Only non-empty levels are present.
    pub fn levels(&self) -> &FrequentItemsets {
        &self.levels
    }

    pub fn level(&self, size: ItemsetLength) -> Option<&ItemsetCounts> {
        self.levels.get(&size)
    }

    /// Support count of an itemset, if it was found frequent.
    pub fn support(&self, itemset: &Itemset) -> Option<SupportCount> {
        self.levels.get(&itemset.len())?.get(itemset).copied()
    }

    /// Largest itemset size reached. 0 when nothing was frequent.
    pub fn max_size(&self) -> ItemsetLength {
        self.levels.keys().copied().max().unwrap_or(0)
    }

    /// Total number of frequent itemsets across all sizes.
    pub fn len(&self) -> usize {
        self.levels.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn min_support_count(&self) -> usize {
        self.min_support_count
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// All frequent itemsets with their counts, ordered by size and then by
    /// canonical itemset. This is the reproducible output order.
    pub fn sorted_itemsets(&self) -> Vec<(&Itemset, SupportCount)> {
        let mut itemsets: Vec<(&Itemset, SupportCount)> = self
            .levels
            .values()
            .flatten()
            .map(|(itemset, &count)| (itemset, count))
            .collect();
        itemsets.sort_unstable_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        itemsets
    }
}

/// Mine all frequent itemsets from the store, level by level.
///
/// Seeds size 1 with every distinct observed item, then alternates counting,
/// thresholding and candidate generation until a level comes up empty, the
/// generator has nothing left to offer, or the configured size cap is hit.
/// The loop is bounded by the largest transaction size regardless: larger
/// candidates can never reach the threshold.
pub fn mine(store: &TransactionStore, config: &MinerConfig) -> Result<MiningResult> {
    if config.max_size == Some(0) {
        return Err(MiningError::ZeroMaxSize);
    }
    let min_support_count = config.min_support.resolve(store.len())?;
    let max_size = config.max_size.unwrap_or(usize::MAX);

    let mut levels: FrequentItemsets = HashMap::new();

    let mut candidates: Vec<Itemset> = (0..store.num_items()).map(|item| vec![item]).collect();
    let mut size: ItemsetLength = 1;

    while !candidates.is_empty() && size <= max_size {
        debug!(size, candidates = candidates.len(), "counting candidates");
        let counts = count_supports(&candidates, store);
        let frequent = filter_frequent(counts, min_support_count);

        if frequent.is_empty() {
            debug!(size, "no frequent itemsets, stopping");
            break;
        }

        info!(size, frequent = frequent.len(), "level complete");
        candidates = generate_candidates(&frequent);
        levels.insert(size, frequent);
        size += 1;
    }

    Ok(MiningResult {
        levels,
        min_support_count,
        num_transactions: store.len(),
    })
}
