//! The equipment pool: a counted multiset of equipment items.
//!
//! Counts are unsigned and removals clamp to available stock, so no
//! negative count is ever observable. Entries that reach zero are pruned.

use std::collections::BTreeMap;

use tracing::debug;

use crate::item::{EquipmentElement, Item, ItemCategory, ItemId};

/// One distinct item held by the pool and how many units are stocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolEntry {
    item: Item,
    count: u32,
}

impl PoolEntry {
    /// The stocked item.
    #[must_use]
    pub const fn item(&self) -> &Item {
        &self.item
    }

    /// Units in stock.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// The entry as an equipment element.
    #[must_use]
    pub fn element(&self) -> EquipmentElement {
        EquipmentElement::new(self.item.clone())
    }

    /// Combined value of every unit in this entry.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        u64::from(self.count) * u64::from(self.item.value)
    }
}

/// Shared equipment pool.
///
/// Entries are keyed by item id and iterated in id order, so queries and
/// `find` are deterministic for a given content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentPool {
    entries: BTreeMap<ItemId, PoolEntry>,
}

impl EquipmentPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` units of the element's item.
    ///
    /// Empty elements and zero counts are ignored.
    pub fn add(&mut self, element: &EquipmentElement, count: u32) {
        match element.item() {
            Some(item) => self.add_item(item, count),
            None => debug!("Ignoring add of empty equipment element"),
        }
    }

    /// Add a single unit of the element's item.
    pub fn add_one(&mut self, element: &EquipmentElement) {
        self.add(element, 1);
    }

    /// Add `count` units of an item.
    pub fn add_item(&mut self, item: &Item, count: u32) {
        if count == 0 {
            return;
        }
        let entry = self
            .entries
            .entry(item.id.clone())
            .or_insert_with(|| PoolEntry {
                item: item.clone(),
                count: 0,
            });
        entry.count = entry.count.saturating_add(count);
    }

    /// Remove up to `count` units of the element's item.
    ///
    /// Returns the number of units actually removed, which is less than
    /// `count` when stock runs short.
    pub fn remove(&mut self, element: &EquipmentElement, count: u32) -> u32 {
        element
            .item_id()
            .map_or(0, |id| self.remove_by_id(id, count))
    }

    /// Remove up to `count` units of the item with the given id.
    pub fn remove_by_id(&mut self, id: &ItemId, count: u32) -> u32 {
        let Some(entry) = self.entries.get_mut(id) else {
            return 0;
        };
        let removed = count.min(entry.count);
        entry.count -= removed;
        if entry.count == 0 {
            self.entries.remove(id);
        }
        removed
    }

    /// Lazily iterate the entries matching `predicate`.
    pub fn query<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a PoolEntry> + 'a
    where
        P: Fn(&PoolEntry) -> bool + 'a,
    {
        self.entries
            .values()
            .filter(move |entry| entry.count > 0 && predicate(entry))
    }

    /// First entry matching `predicate`, if any.
    pub fn find<P>(&self, mut predicate: P) -> Option<&PoolEntry>
    where
        P: FnMut(&PoolEntry) -> bool,
    {
        self.entries
            .values()
            .find(|entry| entry.count > 0 && predicate(entry))
    }

    /// Sum of count x value over matching entries.
    pub fn total_value_of<P>(&self, predicate: P) -> u64
    where
        P: Fn(&PoolEntry) -> bool,
    {
        self.entries
            .values()
            .filter(|entry| predicate(entry))
            .map(PoolEntry::total_value)
            .sum()
    }

    /// Units stocked of one item.
    #[must_use]
    pub fn count_of(&self, id: &ItemId) -> u32 {
        self.entries.get(id).map_or(0, |entry| entry.count)
    }

    /// Units stocked across a whole category.
    #[must_use]
    pub fn category_count(&self, category: ItemCategory) -> u64 {
        self.entries
            .values()
            .filter(|entry| entry.item.category == category)
            .map(|entry| u64::from(entry.count))
            .sum()
    }

    /// Units stocked in total.
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.entries.values().map(|e| u64::from(e.count)).sum()
    }

    /// Number of distinct items in stock.
    #[must_use]
    pub fn distinct_items(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is stocked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate every entry in id order.
    pub fn iter(&self) -> impl Iterator<Item = &PoolEntry> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helmet(id: &str, tier: u8, value: u32) -> Item {
        Item::new(id, id, ItemCategory::HeadArmor, tier, value)
    }

    fn boots(id: &str, value: u32) -> Item {
        Item::new(id, id, ItemCategory::LegArmor, 1, value)
    }

    #[test]
    fn test_add_accumulates() {
        let mut pool = EquipmentPool::new();
        let cap = EquipmentElement::new(helmet("cap", 1, 5));

        pool.add_one(&cap);
        pool.add(&cap, 4);

        assert_eq!(pool.count_of(&ItemId::new("cap")), 5);
        assert_eq!(pool.distinct_items(), 1);
    }

    #[test]
    fn test_add_ignores_empty_and_zero() {
        let mut pool = EquipmentPool::new();
        pool.add(&EquipmentElement::EMPTY, 3);
        pool.add_item(&helmet("cap", 1, 5), 0);

        assert!(pool.is_empty());
        assert_eq!(pool.total_units(), 0);
    }

    #[test]
    fn test_remove_clamps_to_stock() {
        let mut pool = EquipmentPool::new();
        let cap = EquipmentElement::new(helmet("cap", 1, 5));
        pool.add(&cap, 3);

        assert_eq!(pool.remove(&cap, 2), 2);
        assert_eq!(pool.count_of(&ItemId::new("cap")), 1);

        // Asking for more than is left removes what is there
        assert_eq!(pool.remove(&cap, 10), 1);
        assert_eq!(pool.count_of(&ItemId::new("cap")), 0);
        assert!(pool.is_empty());

        assert_eq!(pool.remove(&cap, 1), 0);
        assert_eq!(pool.remove(&EquipmentElement::EMPTY, 1), 0);
    }

    #[test]
    fn test_query_filters_by_category() {
        let mut pool = EquipmentPool::new();
        pool.add_item(&helmet("cap", 1, 5), 2);
        pool.add_item(&helmet("sallet", 3, 20), 1);
        pool.add_item(&boots("boots", 8), 4);

        let helmets: Vec<_> = pool
            .query(|e| e.item().category == ItemCategory::HeadArmor)
            .map(|e| e.item().id.as_str().to_string())
            .collect();
        assert_eq!(helmets, vec!["cap", "sallet"]);

        // Restartable
        assert_eq!(pool.query(|_| true).count(), 3);
        assert_eq!(pool.query(|_| true).count(), 3);
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut pool = EquipmentPool::new();
        pool.add_item(&helmet("cap", 1, 5), 2);
        pool.add_item(&helmet("sallet", 3, 20), 1);

        let found = pool.find(|e| e.item().tier >= 3).map(|e| e.item().id.clone());
        assert_eq!(found, Some(ItemId::new("sallet")));
        assert!(pool.find(|e| e.item().tier > 5).is_none());
    }

    #[test]
    fn test_total_value_and_category_count() {
        let mut pool = EquipmentPool::new();
        pool.add_item(&helmet("cap", 1, 5), 10);
        pool.add_item(&helmet("sallet", 3, 20), 5);
        pool.add_item(&boots("boots", 8), 4);

        let helmet_value =
            pool.total_value_of(|e| e.item().category == ItemCategory::HeadArmor);
        assert_eq!(helmet_value, 150);
        assert_eq!(pool.total_value_of(|_| true), 182);
        assert_eq!(pool.category_count(ItemCategory::HeadArmor), 15);
        assert_eq!(pool.category_count(ItemCategory::Cape), 0);
        assert_eq!(pool.total_units(), 19);
    }
}
