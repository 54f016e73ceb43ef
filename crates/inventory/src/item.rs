//! Item record and its value objects.

use serde::Serialize;

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// Item name: non-empty text, surrounding whitespace stripped on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Validate and construct a name. Rejects empty/whitespace-only input.
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quantity: a positive integer (at least 1).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// Validate and construct a quantity. Rejects values below 1.
    pub fn new(raw: i64) -> DomainResult<Self> {
        if raw < 1 {
            return Err(DomainError::validation(
                "quantity must be greater than zero",
            ));
        }
        Ok(Self(raw))
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One inventory record: a (name, quantity) pair.
///
/// Items carry no identity of their own; a record is addressed by its 1-based
/// position in the owning [`crate::Inventory`]. Name and quantity are fixed at
/// insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    name: ItemName,
    quantity: Quantity,
}

impl InventoryItem {
    pub fn new(name: ItemName, quantity: Quantity) -> Self {
        Self { name, quantity }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn quantity(&self) -> i64 {
        self.quantity.get()
    }
}
