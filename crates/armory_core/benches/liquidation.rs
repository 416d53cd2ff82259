//! Liquidation and replenishment benchmarks for armory_core.
//!
//! Run with: `cargo bench -p armory_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use armory_core::catalog::CatalogRegistry;
use armory_core::item::{Item, ItemCategory, WeaponClass, WeaponProfile};
use armory_core::liquidation::liquidate_surplus;
use armory_core::pool::EquipmentPool;
use armory_core::replenishment::ReplenishmentConverter;
use armory_core::thresholds::{ThresholdRule, ThresholdTable};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn stocked_pool(items_per_category: u32) -> EquipmentPool {
    let mut pool = EquipmentPool::new();
    for category in ItemCategory::ALL.into_iter().filter(|c| c.is_armor()) {
        for i in 0..items_per_category {
            let id = format!("{}_{i}", category.display_name());
            let tier = u8::try_from(i % 7).unwrap_or(0);
            let item = Item::new(id.as_str(), id.as_str(), category, tier, 5 + i * 3);
            pool.add_item(&item, 1 + i % 13);
        }
    }
    pool
}

fn thresholds() -> ThresholdTable {
    ItemCategory::ALL
        .into_iter()
        .filter(|c| c.is_armor())
        .fold(ThresholdTable::new(), |table, category| {
            table.with_rule(
                category,
                ThresholdRule::PerHeadcount {
                    per_member: 2,
                    minimum: 0,
                },
            )
        })
}

fn throwing_catalog() -> CatalogRegistry {
    let mut catalog = CatalogRegistry::new();
    for i in 0..40u32 {
        let id = format!("javelins_{i}");
        let item = Item::new(id.as_str(), id.as_str(), ItemCategory::Thrown, 1, 8 + i)
            .with_weapon(WeaponProfile::new([WeaponClass::Javelin], true));
        catalog.register(item).expect("generated ids are unique");
    }
    catalog
}

/// Liquidate a large pool down to a small party's thresholds.
pub fn liquidation_benchmark(c: &mut Criterion) {
    let pool = stocked_pool(500);
    let table = thresholds();

    c.bench_function("liquidate_2500_items", |b| {
        b.iter_batched(
            || pool.clone(),
            |mut pool| liquidate_surplus(&mut pool, &table, &black_box(40u32)),
            BatchSize::LargeInput,
        );
    });
}

/// Spend a large budget on throwing weapons.
pub fn replenishment_benchmark(c: &mut Criterion) {
    let catalog = throwing_catalog();
    let mut converter = ReplenishmentConverter::default();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    c.bench_function("replenish_50k_denars", |b| {
        b.iter(|| {
            let mut pool = EquipmentPool::new();
            converter.spend(black_box(50_000), &mut pool, &catalog, &mut rng)
        });
    });
}

criterion_group!(benches, liquidation_benchmark, replenishment_benchmark);
criterion_main!(benches);
