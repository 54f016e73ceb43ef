//! The session inventory: an ordered list of item records.

use serde::Serialize;

use stockroom_core::{DomainError, DomainResult};

use crate::item::{InventoryItem, ItemName, Quantity};

/// Ordered inventory owned by one session.
///
/// Insertion order is display order: the position shown to the user (Lp.) is
/// the 1-based index into this list. Duplicate names are permitted and remain
/// distinct entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

/// One row of the display projection: 1-based position plus the record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRow {
    pub position: usize,
    pub name: String,
    pub quantity: i64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Append a new item.
    ///
    /// Validates the raw inputs (name non-empty after trimming, quantity at
    /// least 1) and rejects without mutation on failure. On success returns
    /// the stored record together with its 1-based position, so the caller
    /// can report what was added.
    pub fn add(&mut self, name: &str, quantity: i64) -> DomainResult<(usize, InventoryItem)> {
        let name = ItemName::new(name)?;
        let quantity = Quantity::new(quantity)?;

        let item = InventoryItem::new(name, quantity);
        self.items.push(item.clone());
        Ok((self.items.len(), item))
    }

    /// Remove the item at a 1-based position (as displayed to the user).
    ///
    /// The position is mapped to the internal 0-based index (position − 1).
    /// Positions outside [1, len] (including 0) are rejected without
    /// mutation. Elements after the removed one shift down by one position.
    pub fn remove(&mut self, position: usize) -> DomainResult<InventoryItem> {
        let index = position
            .checked_sub(1)
            .filter(|index| *index < self.items.len())
            .ok_or_else(|| DomainError::position_out_of_range(position, self.items.len()))?;

        Ok(self.items.remove(index))
    }

    /// Display projection: a fresh enumeration of the current list with
    /// 1-based positions recomputed from current order. Pure read, no side
    /// effects.
    pub fn rows(&self) -> Vec<InventoryRow> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| InventoryRow {
                position: index + 1,
                name: item.name().to_string(),
                quantity: item.quantity(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory_of(entries: &[(&str, i64)]) -> Inventory {
        let mut inventory = Inventory::new();
        for (name, quantity) in entries {
            inventory.add(name, *quantity).unwrap();
        }
        inventory
    }

    #[test]
    fn add_appends_to_the_end_and_reports_position() {
        let mut inventory = Inventory::new();

        let (position, item) = inventory.add("Bolt", 10).unwrap();
        assert_eq!(position, 1);
        assert_eq!(item.name(), "Bolt");
        assert_eq!(item.quantity(), 10);

        let (position, _) = inventory.add("Nut", 5).unwrap();
        assert_eq!(position, 2);
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn add_rejects_invalid_input_without_mutation() {
        let mut inventory = Inventory::new();

        assert!(matches!(
            inventory.add("", 5),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            inventory.add("Screw", 0),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            inventory.add("Washer", -3),
            Err(DomainError::Validation(_))
        ));
        assert!(inventory.is_empty());
    }

    #[test]
    fn duplicate_names_are_distinct_entries() {
        let inventory = inventory_of(&[("Bolt", 10), ("Bolt", 3)]);

        let rows = inventory.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].position, rows[0].quantity), (1, 10));
        assert_eq!((rows[1].position, rows[1].quantity), (2, 3));
    }

    #[test]
    fn remove_first_position_shifts_the_rest_down() {
        let mut inventory = inventory_of(&[("Bolt", 10), ("Nut", 5)]);

        let removed = inventory.remove(1).unwrap();
        assert_eq!(removed.name(), "Bolt");
        assert_eq!(removed.quantity(), 10);

        let rows = inventory.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].name, "Nut");
        assert_eq!(rows[0].quantity, 5);
    }

    #[test]
    fn remove_keeps_earlier_elements_untouched() {
        let mut inventory = inventory_of(&[("Bolt", 10), ("Nut", 5), ("Washer", 7)]);

        let removed = inventory.remove(2).unwrap();
        assert_eq!(removed.name(), "Nut");

        let rows = inventory.rows();
        assert_eq!(rows[0].name, "Bolt");
        assert_eq!(rows[1].name, "Washer");
        assert_eq!(rows[1].position, 2);
    }

    #[test]
    fn remove_rejects_out_of_range_positions_without_mutation() {
        let mut inventory = inventory_of(&[("Bolt", 10)]);

        for position in [0, 2, 99] {
            let err = inventory.remove(position).unwrap_err();
            assert_eq!(
                err,
                DomainError::PositionOutOfRange { position, len: 1 }
            );
        }
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn remove_from_empty_inventory_is_rejected() {
        let mut inventory = Inventory::new();

        let err = inventory.remove(1).unwrap_err();
        assert_eq!(err, DomainError::PositionOutOfRange { position: 1, len: 0 });
        assert!(inventory.is_empty());
    }

    #[test]
    fn rows_enumerates_contiguous_positions_in_order() {
        let inventory = inventory_of(&[("Bolt", 10), ("Nut", 5), ("Washer", 7)]);

        let rows = inventory.rows();
        let positions: Vec<usize> = rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(rows[1].name, "Nut");
    }

    #[test]
    fn empty_inventory_projects_no_rows() {
        assert!(Inventory::new().rows().is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                // Use deterministic seed for CI reproducibility
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: a valid add grows the list by exactly one and the new
            /// last element equals the (trimmed) input.
            #[test]
            fn valid_add_appends_exactly_one(
                name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
                quantity in 1i64..1_000_000,
                seed in proptest::collection::vec(("[A-Za-z]{1,8}", 1i64..100), 0..8),
            ) {
                let mut inventory = Inventory::new();
                for (n, q) in &seed {
                    inventory.add(n, *q).unwrap();
                }
                let before = inventory.len();

                let (position, item) = inventory.add(&name, quantity).unwrap();

                prop_assert_eq!(inventory.len(), before + 1);
                prop_assert_eq!(position, before + 1);
                prop_assert_eq!(item.name(), name.trim());
                prop_assert_eq!(item.quantity(), quantity);
                prop_assert_eq!(inventory.items().last().unwrap(), &item);
            }

            /// Property: an invalid add never mutates the list.
            #[test]
            fn invalid_add_leaves_inventory_unchanged(
                name in "\\s{0,5}",
                quantity in proptest::num::i64::ANY,
                seed in proptest::collection::vec(("[A-Za-z]{1,8}", 1i64..100), 0..8),
            ) {
                let mut inventory = Inventory::new();
                for (n, q) in &seed {
                    inventory.add(n, *q).unwrap();
                }
                let snapshot = inventory.clone();

                // Either the blank name or a non-positive quantity must reject.
                let quantity = if quantity >= 1 { 0 } else { quantity };
                prop_assert!(inventory.add(&name, quantity).is_err());
                prop_assert_eq!(inventory, snapshot);
            }

            /// Property: an in-range remove drops exactly the addressed element;
            /// earlier elements keep their positions, later ones shift down by one.
            #[test]
            fn in_range_remove_shifts_later_elements(
                seed in proptest::collection::vec(("[A-Za-z]{1,8}", 1i64..100), 1..12),
                position_seed in proptest::num::usize::ANY,
            ) {
                let mut inventory = Inventory::new();
                for (n, q) in &seed {
                    inventory.add(n, *q).unwrap();
                }
                let before = inventory.rows();
                let position = position_seed % inventory.len() + 1;

                let removed = inventory.remove(position).unwrap();
                prop_assert_eq!(removed.name(), before[position - 1].name.as_str());
                prop_assert_eq!(inventory.len(), before.len() - 1);

                let after = inventory.rows();
                for (index, row) in after.iter().enumerate() {
                    prop_assert_eq!(row.position, index + 1);
                    let source = if index < position - 1 { &before[index] } else { &before[index + 1] };
                    prop_assert_eq!(row.name.as_str(), source.name.as_str());
                    prop_assert_eq!(row.quantity, source.quantity);
                }
            }

            /// Property: an out-of-range remove is rejected and nothing changes.
            #[test]
            fn out_of_range_remove_is_rejected(
                seed in proptest::collection::vec(("[A-Za-z]{1,8}", 1i64..100), 0..8),
                beyond in 1usize..100,
            ) {
                let mut inventory = Inventory::new();
                for (n, q) in &seed {
                    inventory.add(n, *q).unwrap();
                }
                let snapshot = inventory.clone();

                for position in [0, inventory.len() + beyond] {
                    let is_out_of_range = matches!(
                        inventory.remove(position),
                        Err(DomainError::PositionOutOfRange { .. })
                    );
                    prop_assert!(is_out_of_range);
                }
                prop_assert_eq!(inventory, snapshot);
            }

            /// Property: row positions are always the contiguous sequence 1..=N.
            #[test]
            fn row_positions_are_contiguous(
                seed in proptest::collection::vec(("[A-Za-z]{1,8}", 1i64..100), 0..16),
            ) {
                let mut inventory = Inventory::new();
                for (n, q) in &seed {
                    inventory.add(n, *q).unwrap();
                }

                let rows = inventory.rows();
                prop_assert_eq!(rows.len(), inventory.len());
                for (index, row) in rows.iter().enumerate() {
                    prop_assert_eq!(row.position, index + 1);
                }
            }
        }
    }
}
