//! Proptest strategies for armory property tests.

use armory_core::item::{Item, ItemCategory};
use proptest::prelude::*;

/// One pool mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolOp {
    /// Add units of the item at this index.
    Add(usize, u32),
    /// Remove units of the item at this index.
    Remove(usize, u32),
}

/// Generate a helmet with a random tier and value. Ids are made unique by
/// the caller.
pub fn arb_helmet_stats() -> impl Strategy<Value = (u8, u32)> {
    (0u8..=6, 0u32..500)
}

/// Generate a stock of distinct helmets with counts.
pub fn arb_helmet_stock(max_items: usize) -> impl Strategy<Value = Vec<(Item, u32)>> {
    proptest::collection::vec((arb_helmet_stats(), 0u32..40), 1..max_items).prop_map(|lines| {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, ((tier, value), count))| {
                let id = format!("helmet_{i}");
                (Item::new(id.as_str(), id.as_str(), ItemCategory::HeadArmor, tier, value), count)
            })
            .collect()
    })
}

/// Generate a sequence of pool mutations over `item_count` items.
pub fn arb_pool_ops(item_count: usize, max_len: usize) -> impl Strategy<Value = Vec<PoolOp>> {
    let op = prop_oneof![
        (0..item_count, 0u32..20).prop_map(|(i, n)| PoolOp::Add(i, n)),
        (0..item_count, 0u32..30).prop_map(|(i, n)| PoolOp::Remove(i, n)),
    ];
    proptest::collection::vec(op, 0..max_len)
}
