use std::collections::HashMap;

use crate::error::{MiningError, Result};
use crate::types::{Inventory, ItemId, Itemset, RawTransaction, ReverseLookup, Transaction};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// The interned transaction collection. Items are mapped to dense ids in
/// first-encounter order, each transaction is stored as a sorted id vector,
/// and the inventory maps ids back to the original item names.
///
/// Read-only once constructed.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    inventory: Inventory,
}

impl TransactionStore {
    /// Intern and validate a collection of transactions.
    ///
    /// Each transaction must be non-empty and must not repeat an item; the
    /// loader is expected to have normalized its input already, so either
    /// case is an error rather than something to repair here.
    pub fn new(raw_transactions: &[RawTransaction]) -> Result<TransactionStore> {
        let mut reverse_lookup: ReverseLookup = HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
        let mut inventory: Inventory = HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
        let mut last_item_id = 0;

        let mut transactions: Vec<Transaction> = Vec::with_capacity(raw_transactions.len());

        for (index, raw_transaction) in raw_transactions.iter().enumerate() {
            if raw_transaction.is_empty() {
                return Err(MiningError::EmptyTransaction { index });
            }

            let mut items: Transaction = Vec::with_capacity(raw_transaction.len());

            for &item in raw_transaction {
                let item_id = match reverse_lookup.get(item) {
                    Some(&item_id) => item_id,
                    None => {
                        let item_id = last_item_id;
                        reverse_lookup.insert(item.to_owned(), item_id);
                        inventory.insert(item_id, item.to_owned());
                        last_item_id += 1;
                        item_id
                    }
                };
                items.push(item_id);
            }

            items.sort_unstable();

            if let Some(window) = items.windows(2).find(|window| window[0] == window[1]) {
                return Err(MiningError::DuplicateItem {
                    index,
                    item: inventory[&window[0]].clone(),
                });
            }

            transactions.push(items);
        }

        Ok(TransactionStore {
            transactions,
            inventory,
        })
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of distinct items across all transactions.
    pub fn num_items(&self) -> usize {
        self.inventory.len()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn item_name(&self, item: ItemId) -> Option<&str> {
        self.inventory.get(&item).map(String::as_str)
    }

    /// Map an itemset back to the original item names.
    pub fn decode(&self, itemset: &Itemset) -> Vec<&str> {
        itemset
            .iter()
            .map(|item| self.inventory[item].as_str())
            .collect()
    }
}
