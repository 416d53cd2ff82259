//! Property tests for pool accounting, liquidation and replenishment.

use std::collections::BTreeMap;

use armory_core::liquidation::liquidate_category;
use armory_core::prelude::*;
use armory_core::replenishment::ReplenishmentConverter;
use armory_test_utils::fixtures::{catalog, javelins, pool_with, seeded_rng};
use armory_test_utils::proptest::prelude::*;
use armory_test_utils::strategies::{arb_helmet_stock, arb_pool_ops, PoolOp};

proptest! {
    /// Counts follow a saturating model and empty entries disappear.
    #[test]
    fn prop_pool_counts_never_go_negative(
        stock in arb_helmet_stock(6),
        ops in arb_pool_ops(5, 40),
    ) {
        let mut pool = EquipmentPool::new();
        let mut model: BTreeMap<usize, u32> = BTreeMap::new();

        for op in ops {
            match op {
                PoolOp::Add(i, n) => {
                    let Some((item, _)) = stock.get(i) else { continue };
                    pool.add_item(item, n);
                    *model.entry(i).or_default() += n;
                }
                PoolOp::Remove(i, n) => {
                    let Some((item, _)) = stock.get(i) else { continue };
                    let held = model.entry(i).or_default();
                    let removed = pool.remove_by_id(&item.id, n);
                    prop_assert_eq!(removed, n.min(*held));
                    *held -= removed;
                }
            }
        }

        for (i, count) in &model {
            prop_assert_eq!(pool.count_of(&stock[*i].0.id), *count);
        }
        prop_assert!(pool.iter().all(|entry| entry.count() > 0));
        prop_assert_eq!(pool.total_units(), model.values().map(|c| u64::from(*c)).sum::<u64>());
    }

    /// Liquidation lands exactly on the threshold and sells the lowest
    /// (tier, value) units first.
    #[test]
    fn prop_liquidation_is_greedy(
        stock in arb_helmet_stock(8),
        threshold in 0u64..60,
    ) {
        let mut pool = pool_with(&stock);
        let before = pool.clone();
        let current = before.category_count(ItemCategory::HeadArmor);

        let sale = liquidate_category(&mut pool, ItemCategory::HeadArmor, threshold);

        prop_assert_eq!(pool.category_count(ItemCategory::HeadArmor), current.min(threshold));
        prop_assert_eq!(sale.is_none(), current <= threshold);

        let mut sold_value = 0u64;
        let mut highest_sold = None;
        let mut lowest_kept = None;
        for entry in before.iter() {
            let item = entry.item();
            let kept = pool.count_of(&item.id);
            let sold = entry.count() - kept;
            sold_value += u64::from(sold) * u64::from(item.value);
            let key = item.liquidation_key();
            if sold > 0 {
                highest_sold = highest_sold.max(Some(key));
            }
            if kept > 0 {
                lowest_kept = Some(lowest_kept.map_or(key, |k: (u8, u32)| k.min(key)));
            }
        }

        prop_assert_eq!(sale.map_or(0, |s| s.proceeds), sold_value);
        if let (Some(sold), Some(kept)) = (highest_sold, lowest_kept) {
            prop_assert!(sold <= kept);
        }
    }

    /// Liquidation only ever removes stock.
    #[test]
    fn prop_liquidation_never_adds(
        stock in arb_helmet_stock(8),
        headcount in 0u32..20,
    ) {
        let mut pool = pool_with(&stock);
        let before = pool.clone();
        let table = ThresholdTable::new().with_rule(
            ItemCategory::HeadArmor,
            ThresholdRule::PerHeadcount { per_member: 2, minimum: 0 },
        );

        let report = armory_core::liquidation::liquidate_surplus(&mut pool, &table, &headcount);

        for entry in before.iter() {
            prop_assert!(pool.count_of(&entry.item().id) <= entry.count());
        }
        prop_assert_eq!(
            before.total_units() - pool.total_units(),
            report.units_sold()
        );
    }

    /// Replenishment never overspends and leaves less than the cheapest
    /// eligible price unspent.
    #[test]
    fn prop_replenishment_stays_within_budget(
        prices in proptest::collection::vec(1u32..60, 1..6),
        budget in 0u64..2_000,
        seed in any::<u64>(),
    ) {
        let catalog = catalog(
            prices
                .iter()
                .enumerate()
                .map(|(i, price)| javelins(&format!("javelins_{i}"), 1, *price)),
        );
        let mut converter = ReplenishmentConverter::default();
        let mut pool = EquipmentPool::new();

        let report = converter.spend(budget, &mut pool, &catalog, &mut seeded_rng(seed));

        let cheapest = u64::from(*prices.iter().min().unwrap());
        prop_assert!(report.spent <= budget);
        prop_assert!(budget - report.spent < cheapest);
        prop_assert_eq!(pool.total_units(), u64::from(report.acquired));
        prop_assert_eq!(pool.total_value_of(|_| true), report.spent);
    }

    /// Without candidates the budget is kept and nothing is bought.
    #[test]
    fn prop_no_candidates_buys_nothing(budget in any::<u64>(), seed in any::<u64>()) {
        let mut converter = ReplenishmentConverter::default();
        let mut pool = EquipmentPool::new();

        let report = converter.spend(budget, &mut pool, &CatalogRegistry::new(), &mut seeded_rng(seed));

        prop_assert_eq!(report.spent, 0);
        prop_assert_eq!(report.acquired, 0);
        prop_assert!(pool.is_empty());
    }
}
