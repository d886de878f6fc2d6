// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Zoo Economy Engine - Upgrade Bonus Resolution

use std::collections::HashSet;

use crate::catalog::ItemCatalog;
use crate::types::{EconomyBonusVector, ItemId};

/// Sum the bonus effects of every owned item.
///
/// Owned items are a set: a duplicated identifier counts once. Unknown
/// identifiers contribute nothing.
pub fn resolve_bonuses(items: &ItemCatalog, owned: &[ItemId]) -> EconomyBonusVector {
    let mut seen = HashSet::with_capacity(owned.len());
    let mut total = EconomyBonusVector::none();
    for id in owned {
        if !seen.insert(id) {
            continue;
        }
        match items.get(id) {
            Some(def) => total = total + def.bonus,
            None => log::debug!("bonus: ignoring unknown item `{}`", id),
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<ItemId> {
        raw.iter().map(|s| ItemId::from(*s)).collect()
    }

    #[test]
    fn no_items_no_bonus() {
        let v = resolve_bonuses(&ItemCatalog::builtin(), &[]);
        assert_eq!(v, EconomyBonusVector::none());
    }

    #[test]
    fn bonuses_from_several_items_add_up() {
        let v = resolve_bonuses(
            &ItemCatalog::builtin(),
            &ids(&["visitor_map", "billboard", "petting_zone", "gift_shop"]),
        );
        assert!((v.visitor_boost - 0.30).abs() < 1e-9);
        assert!((v.income_multiplier - 0.20).abs() < 1e-9);
        assert!((v.xp_bonus - 0.10).abs() < 1e-9);
        assert_eq!(v.cost_reduction, 0.0);
    }

    #[test]
    fn duplicates_count_once() {
        let v = resolve_bonuses(
            &ItemCatalog::builtin(),
            &ids(&["bulk_feed_contract", "bulk_feed_contract"]),
        );
        assert!((v.cost_reduction - 0.15).abs() < 1e-9);
    }

    #[test]
    fn unknown_and_cosmetic_items_are_neutral() {
        let v = resolve_bonuses(&ItemCatalog::builtin(), &ids(&["laser_cannon", "fountain"]));
        assert_eq!(v, EconomyBonusVector::none());
    }
}
