use serde::{Deserialize, Serialize};

use stockroom_inventory::{InventoryItem, InventoryRow};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub name: String,
    pub quantity: i64,
}

/// HTML form fields arrive as text; numeric parsing happens in the page
/// handlers so a bad value becomes a flash message, not a framework 422.
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    pub name: String,
    pub quantity: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveItemForm {
    pub position: String,
}

/// One-shot flash parameters carried across the form-post redirect.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub notice: Option<String>,
    pub error: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub position: usize,
    pub name: String,
    pub quantity: i64,
}

impl ItemResponse {
    pub fn new(position: usize, item: &InventoryItem) -> Self {
        Self {
            position,
            name: item.name().to_string(),
            quantity: item.quantity(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InventoryResponse {
    pub count: usize,
    pub items: Vec<InventoryRow>,
}

impl InventoryResponse {
    pub fn new(items: Vec<InventoryRow>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
