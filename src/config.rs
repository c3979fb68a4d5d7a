use crate::error::{MiningError, Result};
use crate::types::ItemsetLength;

/// Minimum support, either as an absolute transaction count or as a
/// fraction of the total transaction count.
///
/// Both forms resolve to a single absolute count before mining starts and
/// the resolved threshold never changes for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    /// Absolute number of transactions, at least 1.
    Count(usize),
    /// Fraction of the total transaction count, in (0, 1].
    Fraction(f64),
}

impl MinSupport {
    /// Resolve to an absolute support count for a collection of
    /// `num_transactions` transactions.
    pub fn resolve(&self, num_transactions: usize) -> Result<usize> {
        match *self {
            MinSupport::Count(0) => Err(MiningError::ZeroSupportCount),
            MinSupport::Count(count) => Ok(count),
            MinSupport::Fraction(fraction) if fraction > 0.0 && fraction <= 1.0 => {
                Ok((fraction * num_transactions as f64).ceil() as usize)
            }
            MinSupport::Fraction(fraction) => {
                Err(MiningError::SupportFractionOutOfRange(fraction))
            }
        }
    }
}

/// Miner configuration: the support threshold plus an optional cap on the
/// itemset size. Without a cap, mining runs until no candidates survive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinerConfig {
    pub min_support: MinSupport,
    pub max_size: Option<ItemsetLength>,
}

impl MinerConfig {
    pub fn new(min_support: MinSupport) -> Self {
        MinerConfig {
            min_support,
            max_size: None,
        }
    }

    pub fn with_max_size(mut self, max_size: ItemsetLength) -> Self {
        self.max_size = Some(max_size);
        self
    }
}
