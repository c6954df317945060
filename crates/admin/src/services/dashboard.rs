//! Overview screen aggregates.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::Serialize;

use inventory_pro_core::{Item, StockStatus};

/// Number of entries in the top items panel.
pub const TOP_ITEMS: usize = 4;

/// Aggregate figures shown on the overview cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_items: usize,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_value: Decimal,
    pub low_stock: usize,
    pub categories: usize,
}

impl DashboardStats {
    #[must_use]
    pub fn compute(items: &[Item]) -> Self {
        let categories: HashSet<&str> = items.iter().map(|i| i.category.as_str()).collect();
        Self {
            total_items: items.len(),
            total_value: items.iter().map(Item::stock_value).sum(),
            low_stock: items
                .iter()
                .filter(|i| i.stock_status() != StockStatus::InStock)
                .count(),
            categories: categories.len(),
        }
    }
}

/// One line of the recent activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub action: &'static str,
    pub item: &'static str,
    pub when: &'static str,
}

/// Recent activity is not tracked; the feed is a fixed sample.
pub const RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        action: "Product added",
        item: "Wireless Headphones",
        when: "2 hours ago",
    },
    Activity {
        action: "Stock updated",
        item: "Laptop Stand",
        when: "4 hours ago",
    },
    Activity {
        action: "Product edited",
        item: "USB Cable",
        when: "6 hours ago",
    },
    Activity {
        action: "Low stock alert",
        item: "Power Bank",
        when: "1 day ago",
    },
];

/// Row of the top items panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopItem {
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
    /// Stock bar fill, 0..=100.
    pub fill_percent: u32,
}

/// The `limit` items with the highest stock value, highest first.
///
/// Ties keep catalog order.
#[must_use]
pub fn top_items(items: &[Item], limit: usize) -> Vec<TopItem> {
    let mut ranked: Vec<&Item> = items.iter().collect();
    ranked.sort_by_key(|item| std::cmp::Reverse(item.stock_value()));
    ranked
        .into_iter()
        .take(limit)
        .map(|item| TopItem {
            name: item.name.clone(),
            quantity: item.quantity,
            value: item.stock_value(),
            fill_percent: item.quantity.min(100),
        })
        .collect()
}
