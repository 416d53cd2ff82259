//! Assignment: equipping a troop from the pool.

use tracing::warn;

use crate::item::ItemId;
use crate::loadout::Loadout;
use crate::pool::EquipmentPool;

/// Which pieces of a loadout came out of the pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentReport {
    /// Items withdrawn, one unit each.
    pub withdrawn: Vec<ItemId>,
    /// Items the loadout wanted but the pool did not stock.
    pub missing: Vec<ItemId>,
}

impl AssignmentReport {
    /// Check if every occupied slot was covered by stock.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Withdraw one unit per occupied slot of `loadout`.
///
/// Empty slots are skipped. Pieces the pool does not stock are logged and
/// recorded as missing; the rest of the loadout is still withdrawn.
pub fn assign_equipment(pool: &mut EquipmentPool, loadout: &Loadout) -> AssignmentReport {
    let mut report = AssignmentReport::default();
    for (slot, item) in loadout.occupied() {
        if pool.remove_by_id(&item.id, 1) == 1 {
            report.withdrawn.push(item.id.clone());
        } else {
            warn!("Assigning {} to {slot:?} without stock in the armory", item.id);
            report.missing.push(item.id.clone());
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemCategory};
    use crate::loadout::EquipmentSlot;

    #[test]
    fn test_assign_withdraws_one_per_slot() {
        let cap = Item::new("cap", "Cap", ItemCategory::HeadArmor, 1, 5);
        let boots = Item::new("boots", "Boots", ItemCategory::LegArmor, 1, 8);
        let mut pool = EquipmentPool::new();
        pool.add_item(&cap, 2);
        pool.add_item(&boots, 1);

        let loadout = Loadout::new()
            .with(EquipmentSlot::Head, cap)
            .with(EquipmentSlot::Leg, boots);

        let report = assign_equipment(&mut pool, &loadout);
        assert!(report.is_complete());
        assert_eq!(report.withdrawn.len(), 2);
        assert_eq!(pool.count_of(&"cap".into()), 1);
        assert_eq!(pool.count_of(&"boots".into()), 0);

        // Boots are gone now
        let report = assign_equipment(&mut pool, &loadout);
        assert_eq!(report.withdrawn, vec![ItemId::new("cap")]);
        assert_eq!(report.missing, vec![ItemId::new("boots")]);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_assign_empty_loadout_is_noop() {
        let mut pool = EquipmentPool::new();
        pool.add_item(&Item::new("cap", "Cap", ItemCategory::HeadArmor, 1, 5), 1);

        let report = assign_equipment(&mut pool, &Loadout::new());

        assert_eq!(report, AssignmentReport::default());
        assert_eq!(pool.total_units(), 1);
    }
}
