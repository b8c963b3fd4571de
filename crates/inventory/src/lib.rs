//! Warehouse inventory demo.
//!
//! The most structured of the four demos: a typed repository of inventory
//! items (electronic and grocery variants) exercised by a manager that
//! deliberately triggers each error condition and prints the outcome.

pub mod item;
pub mod manager;

pub use item::{InventoryItem, ItemId, ItemKind};
pub use manager::InventoryManager;

/// Run the inventory demonstration sequence, printing outcomes to stdout.
pub fn run_demo() {
    println!("\n--- Inventory demo ---");
    let mut manager = InventoryManager::with_sample_data();

    println!("Items in stock:");
    for item in manager.items() {
        println!("  {item}");
    }

    // Each of these is an expected failure; the condition is caught here and
    // printed, never propagated.
    let duplicate = InventoryItem::electronic(
        ItemId(1),
        "Laptop (duplicate)",
        5,
        "Dell",
        12,
    );
    if let Err(err) = manager.add_item(duplicate) {
        println!("Duplicate insert rejected: {err}");
    }

    if let Err(err) = manager.remove_item(ItemId(99)) {
        println!("Removal of absent id rejected: {err}");
    }

    if let Err(err) = manager.update_quantity(ItemId(1), -3) {
        println!("Negative quantity update rejected: {err}");
    }

    println!("--- Inventory demo end ---");
}
