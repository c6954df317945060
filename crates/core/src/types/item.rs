//! Catalog item types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ItemId, Price, StockStatus};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub description: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Item {
    /// Value of the stock on hand (`unit_price × quantity`).
    #[must_use]
    pub fn stock_value(&self) -> Decimal {
        self.unit_price.times(self.quantity)
    }

    #[must_use]
    pub const fn stock_status(&self) -> StockStatus {
        StockStatus::for_quantity(self.quantity)
    }

    /// Case-insensitive substring match on name or description.
    ///
    /// An empty needle matches everything.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Validated editor input for creating or updating an item.
///
/// Carries everything except the identifiers and timestamps, which the
/// catalog assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub description: String,
}
