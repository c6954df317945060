//! Item catalog provider.
//!
//! The panel only needs to list items, look one up, and hand edits back.
//! [`DemoCatalog`] serves a fixed list and drops every save after logging it.

use chrono::NaiveDate;
use thiserror::Error;

use inventory_pro_core::{Item, ItemDraft, ItemId, Price};

/// Categories offered by the item editor.
pub const EDITOR_CATEGORIES: &[&str] = &[
    "Electronics",
    "Accessories",
    "Cables",
    "Storage",
    "Audio",
    "Computing",
    "Mobile",
    "Gaming",
];

/// Category filter value that matches every item.
pub const ALL_CATEGORIES: &str = "all";

/// Errors from a catalog backend.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("item {0} not found")]
    NotFound(ItemId),
    #[error("catalog backend unavailable: {0}")]
    Unavailable(String),
}

/// Source of catalog items.
pub trait CatalogProvider: Send + Sync {
    /// All items, in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the backend cannot be read.
    fn list(&self) -> Result<Vec<Item>, CatalogError>;

    /// A single item.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` for unknown IDs.
    fn get(&self, id: ItemId) -> Result<Item, CatalogError>;

    /// Store a new item (`target = None`) or an update to `target`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the backend rejects the write.
    fn save(&self, target: Option<ItemId>, draft: &ItemDraft) -> Result<(), CatalogError>;
}

/// Static in-memory catalog.
pub struct DemoCatalog {
    items: Vec<Item>,
}

impl DemoCatalog {
    #[must_use]
    pub fn new() -> Self {
        let items = [
            (
                1,
                "Wireless Headphones",
                "Electronics",
                15_000,
                45,
                "Premium noise-cancelling wireless headphones",
                (1, 15),
                (1, 20),
            ),
            (
                2,
                "Laptop Stand",
                "Accessories",
                10_000,
                32,
                "Adjustable aluminum laptop stand",
                (1, 10),
                (1, 18),
            ),
            (
                3,
                "USB-C Cable",
                "Cables",
                2_000,
                89,
                "High-speed USB-C charging cable",
                (1, 12),
                (1, 19),
            ),
            (
                4,
                "Power Bank",
                "Electronics",
                10_000,
                8,
                "20000mAh portable power bank",
                (1, 8),
                (1, 16),
            ),
            (
                5,
                "Bluetooth Speaker",
                "Electronics",
                8_000,
                25,
                "Waterproof portable Bluetooth speaker",
                (1, 14),
                (1, 21),
            ),
        ]
        .into_iter()
        .filter_map(
            |(id, name, category, cents, quantity, description, created, updated)| {
                Some(Item {
                    id: ItemId::new(id),
                    name: name.to_string(),
                    category: category.to_string(),
                    unit_price: Price::from_cents(cents),
                    quantity,
                    description: description.to_string(),
                    created_at: NaiveDate::from_ymd_opt(2024, created.0, created.1)?,
                    updated_at: NaiveDate::from_ymd_opt(2024, updated.0, updated.1)?,
                })
            },
        )
        .collect();

        Self { items }
    }

    /// Catalog over an explicit item list.
    #[must_use]
    pub const fn with_items(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for DemoCatalog {
    fn list(&self) -> Result<Vec<Item>, CatalogError> {
        Ok(self.items.clone())
    }

    fn get(&self, id: ItemId) -> Result<Item, CatalogError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    fn save(&self, target: Option<ItemId>, draft: &ItemDraft) -> Result<(), CatalogError> {
        if let Some(id) = target {
            self.get(id)?;
        }
        tracing::info!(
            target_id = ?target.map(|id| id.as_i32()),
            name = %draft.name,
            category = %draft.category,
            unit_price = %draft.unit_price,
            quantity = draft.quantity,
            "Item save accepted (demo catalog does not persist)"
        );
        Ok(())
    }
}

/// Search and category filter for the catalog screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Substring matched against name and description.
    pub text: String,
    /// Exact category, or `None` for all.
    pub category: Option<String>,
}

impl CatalogFilter {
    /// Build a filter from raw query values; `all` or blank means any category.
    #[must_use]
    pub fn new(text: Option<&str>, category: Option<&str>) -> Self {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
            .map(str::to_string);
        Self {
            text: text.unwrap_or_default().trim().to_string(),
            category,
        }
    }

    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        item.matches_text(&self.text)
            && self
                .category
                .as_deref()
                .is_none_or(|category| item.category == category)
    }

    #[must_use]
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Category filter options: `all`, then each category in first-seen order.
#[must_use]
pub fn category_options(items: &[Item]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !options.iter().skip(1).any(|c| *c == item.category) {
            options.push(item.category.clone());
        }
    }
    options
}
