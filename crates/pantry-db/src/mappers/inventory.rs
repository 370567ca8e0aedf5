//! Inventory item entity <-> model mapper

use pantry_core::entities::InventoryItem;

use crate::models::InventoryItemModel;

/// Convert InventoryItemModel to InventoryItem entity
impl From<InventoryItemModel> for InventoryItem {
    fn from(model: InventoryItemModel) -> Self {
        InventoryItem {
            id: model.id,
            name: model.name,
            category: model.category,
            quantity: model.quantity,
            unit: model.unit,
            expiry_date: model.expiry_date,
            low_stock_threshold: model.low_stock_threshold,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
            created_by: model.created_by,
        }
    }
}
