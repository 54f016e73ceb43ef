//! Inventory domain module.
//!
//! This crate contains the business rules for the session inventory list,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod item;
pub mod list;

pub use item::{InventoryItem, ItemName, Quantity};
pub use list::{Inventory, InventoryRow};
