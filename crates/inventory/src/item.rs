//! Inventory item records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use miniops_core::{Entity, Quantified};

/// Inventory item identifier, unique within a repository.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Variant-specific attributes.
///
/// Electronic and grocery items share the base fields and differ only in
/// these extras; no behavior differs by variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Electronic {
        brand: String,
        warranty_months: u32,
    },
    Grocery {
        expires_on: NaiveDate,
    },
}

/// An item held in stock: id, display name, non-negative quantity, and
/// variant attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    quantity: i64,
    kind: ItemKind,
}

impl InventoryItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: i64, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            kind,
        }
    }

    /// Convenience constructor for the electronic variant.
    pub fn electronic(
        id: ItemId,
        name: impl Into<String>,
        quantity: i64,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self::new(
            id,
            name,
            quantity,
            ItemKind::Electronic {
                brand: brand.into(),
                warranty_months,
            },
        )
    }

    /// Convenience constructor for the grocery variant.
    pub fn grocery(
        id: ItemId,
        name: impl Into<String>,
        quantity: i64,
        expires_on: NaiveDate,
    ) -> Self {
        Self::new(id, name, quantity, ItemKind::Grocery { expires_on })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

impl Quantified for InventoryItem {
    fn quantity(&self) -> i64 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl core::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{} {} x{}", self.id, self.name, self.quantity)?;
        match &self.kind {
            ItemKind::Electronic {
                brand,
                warranty_months,
            } => write!(f, " [electronic: {brand}, {warranty_months}mo warranty]"),
            ItemKind::Grocery { expires_on } => {
                write!(f, " [grocery: expires {expires_on}]")
            }
        }
    }
}
