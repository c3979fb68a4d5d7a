//! Level-wise A-Priori frequent-itemset mining.
//!
//! The engine takes an interned, read-only [`TransactionStore`] and a
//! resolved support threshold, then alternates support counting and
//! candidate generation per itemset size: count the candidates in one pass
//! over the transactions, keep the ones that reach the threshold, join them
//! with the frequent items of the level and prune by downward closure to
//! get the next level's candidates. Mining stops at the first empty level.
//!
//! ```
//! use freqmine::{mine, MinSupport, MinerConfig, TransactionStore};
//!
//! let store = TransactionStore::new(&[
//!     vec!["bread", "milk"],
//!     vec!["bread", "milk", "cereal"],
//!     vec!["bread", "yoghurt"],
//! ])?;
//! let result = mine(&store, &MinerConfig::new(MinSupport::Count(2)))?;
//!
//! assert_eq!(result.support(&vec![0, 1]), Some(2)); // {bread, milk}
//! # Ok::<(), freqmine::MiningError>(())
//! ```

pub mod candidates;
pub mod config;
pub mod counter;
pub mod error;
pub mod miner;
pub mod store;
pub mod types;

pub use config::{MinSupport, MinerConfig};
pub use error::{MiningError, Result};
pub use miner::{mine, MiningResult};
pub use store::TransactionStore;
pub use types::{
    FrequentItemsets, Inventory, ItemId, Itemset, ItemsetCounts, ItemsetLength, RawTransaction,
    SupportCount, Transaction,
};
