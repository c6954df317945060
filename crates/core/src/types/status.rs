//! Role and status enums.

use serde::{Deserialize, Serialize};

/// Role of a signed-in identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sees the statistics overview and the catalog.
    Manager,
    /// Works the catalog only.
    StoreKeeper,
}

impl Role {
    /// Human-readable role name, as shown in the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::StoreKeeper => "Store Keeper",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manager => write!(f, "manager"),
            Self::StoreKeeper => write!(f, "store_keeper"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(Self::Manager),
            "store_keeper" => Ok(Self::StoreKeeper),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// Stock level classification of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Quantities strictly below this are low stock.
    pub const LOW_STOCK_THRESHOLD: u32 = 20;

    /// Classify a quantity on hand.
    #[must_use]
    pub const fn for_quantity(quantity: u32) -> Self {
        if quantity == 0 {
            Self::OutOfStock
        } else if quantity < Self::LOW_STOCK_THRESHOLD {
            Self::LowStock
        } else {
            Self::InStock
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of Stock",
            Self::LowStock => "Low Stock",
            Self::InStock => "In Stock",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_string_roundtrip() {
        for role in [Role::Manager, Role::StoreKeeper] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Manager.label(), "Manager");
        assert_eq!(Role::StoreKeeper.label(), "Store Keeper");
    }

    #[test]
    fn test_stock_status_boundaries() {
        assert_eq!(StockStatus::for_quantity(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::for_quantity(1), StockStatus::LowStock);
        assert_eq!(StockStatus::for_quantity(19), StockStatus::LowStock);
        assert_eq!(StockStatus::for_quantity(20), StockStatus::InStock);
    }
}
