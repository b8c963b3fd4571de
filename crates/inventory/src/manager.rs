//! Inventory manager: seeds sample stock and fronts the repository.

use chrono::NaiveDate;

use miniops_core::{DomainResult, Repository};

use crate::item::{InventoryItem, ItemId};

/// Thin facade over a `Repository<InventoryItem>`.
///
/// The manager owns the repository for the lifetime of the demo; nothing is
/// persisted beyond the process.
#[derive(Debug, Default)]
pub struct InventoryManager {
    items: Repository<InventoryItem>,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self {
            items: Repository::new(),
        }
    }

    /// A manager pre-populated with the fixed sample records used by the
    /// demo driver.
    pub fn with_sample_data() -> Self {
        let mut manager = Self::new();
        let seed = [
            InventoryItem::electronic(ItemId(1), "Laptop", 8, "Dell", 24),
            InventoryItem::electronic(ItemId(2), "Headphones", 30, "Sony", 12),
            InventoryItem::grocery(
                ItemId(3),
                "Rice 5kg",
                50,
                NaiveDate::from_ymd_opt(2027, 1, 31).expect("valid seed date"),
            ),
            InventoryItem::grocery(
                ItemId(4),
                "Milk 1L",
                24,
                NaiveDate::from_ymd_opt(2026, 9, 12).expect("valid seed date"),
            ),
        ];
        for item in seed {
            // Seed ids are distinct by construction.
            manager
                .items
                .add(item)
                .expect("sample data has distinct ids");
        }
        manager
    }

    pub fn add_item(&mut self, item: InventoryItem) -> DomainResult<()> {
        self.items.add(item)
    }

    pub fn get_item(&self, id: ItemId) -> DomainResult<&InventoryItem> {
        self.items.get(id)
    }

    pub fn remove_item(&mut self, id: ItemId) -> DomainResult<InventoryItem> {
        self.items.remove(id)
    }

    pub fn update_quantity(&mut self, id: ItemId, new_quantity: i64) -> DomainResult<()> {
        self.items.update_quantity(id, new_quantity)
    }

    /// Snapshot of the current stock in ascending id order.
    pub fn items(&self) -> Vec<InventoryItem> {
        self.items.list()
    }
}
