use std::collections::HashMap;

pub type ItemId = usize;
pub type ItemName<'l> = &'l str;
pub type Itemset = Vec<ItemId>;

pub type ReverseLookup = HashMap<String, ItemId>;
pub type Inventory = HashMap<ItemId, String>;

/// A transaction as handed over by the loader: ordered, not yet interned.
pub type RawTransaction<'l> = Vec<ItemName<'l>>;
/// An interned transaction: sorted item ids, no duplicates.
pub type Transaction = Vec<ItemId>;

pub type SupportCount = u32;
pub type ItemsetCounts = HashMap<Itemset, SupportCount>;

pub type ItemsetLength = usize;
pub type FrequentItemsets = HashMap<ItemsetLength, ItemsetCounts>;
