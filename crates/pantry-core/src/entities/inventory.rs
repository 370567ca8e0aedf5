//! Inventory item entity and stock status derivation

use chrono::{DateTime, NaiveDate, Utc};

use crate::calendar::expiry_cutoff;

/// Days ahead of today within which an expiry date counts as "expiring soon"
pub const EXPIRY_WINDOW_DAYS: u64 = 7;

/// Default low-stock threshold applied when none is supplied
pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 5;

/// Display status of an inventory item
///
/// Exactly one status applies to an item at a time; see [`ItemStatus::classify`]
/// for the precedence. This is distinct from the dashboard alert predicates
/// ([`InventoryItem::is_low_stock`] / [`InventoryItem::is_expiring`]), which
/// are not mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    OutOfStock,
    LowStock,
    ExpiresSoon,
    InStock,
}

impl ItemStatus {
    /// Classify an item, first match wins:
    /// zero quantity, then low stock, then imminent expiry, then in stock.
    pub fn classify(quantity: i32, threshold: i32, expiry: Option<NaiveDate>, today: NaiveDate) -> Self {
        if quantity == 0 {
            Self::OutOfStock
        } else if quantity <= threshold {
            Self::LowStock
        } else if expiry.is_some_and(|d| d <= expiry_cutoff(today)) {
            Self::ExpiresSoon
        } else {
            Self::InStock
        }
    }

    /// Parse a status from its display string (used for list filtering)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Out of Stock" => Some(Self::OutOfStock),
            "Low Stock" => Some(Self::LowStock),
            "Expiring Soon" | "Expires Soon" => Some(Self::ExpiresSoon),
            "In Stock" => Some(Self::InStock),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of Stock",
            Self::LowStock => "Low Stock",
            Self::ExpiresSoon => "Expires Soon",
            Self::InStock => "In Stock",
        }
    }
}

/// Inventory item entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
    pub expiry_date: Option<NaiveDate>,
    pub low_stock_threshold: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl InventoryItem {
    /// Display status as of `today`
    pub fn status(&self, today: NaiveDate) -> ItemStatus {
        ItemStatus::classify(self.quantity, self.low_stock_threshold, self.expiry_date, today)
    }

    /// Low-stock alert predicate: quantity at or below the threshold.
    /// Unlike the display status this includes out-of-stock items.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_stock_threshold
    }

    /// Expiring alert predicate: non-null expiry within the 7-day window.
    /// Independent of stock level; an item can be low stock and expiring.
    #[inline]
    pub fn is_expiring(&self, today: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|d| d <= expiry_cutoff(today))
    }
}

/// Fields for creating an inventory item
#[derive(Debug, Clone)]
pub struct NewInventoryItem {
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub unit: String,
    pub expiry_date: Option<NaiveDate>,
    pub low_stock_threshold: i32,
    pub notes: Option<String>,
}

/// Partial update of an inventory item; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct InventoryItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    pub unit: Option<String>,
    pub expiry_date: Option<Option<NaiveDate>>,
    pub low_stock_threshold: Option<i32>,
    pub notes: Option<Option<String>>,
}
