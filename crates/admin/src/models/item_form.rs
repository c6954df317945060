//! Item editor form.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use inventory_pro_core::{CurrencyCode, Item, ItemDraft, Price};

use crate::services::catalog::EDITOR_CATEGORIES;

/// Raw editor input, kept as submitted so it can be echoed back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub description: String,
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
    pub description: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.description.is_none()
    }
}

impl ItemForm {
    /// Prefill from an existing item.
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            price: item.unit_price.amount().normalize().to_string(),
            quantity: item.quantity.to_string(),
            description: item.description.clone(),
        }
    }

    /// Validate every field, collecting one message per failing field.
    ///
    /// # Errors
    ///
    /// Returns `FieldErrors` if any field is invalid.
    pub fn validate(&self) -> Result<ItemDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("Product name is required".to_string());
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.category = Some("Category is required".to_string());
        } else if !EDITOR_CATEGORIES.contains(&category) {
            errors.category = Some("Choose a category from the list".to_string());
        }

        let unit_price = Decimal::from_str(self.price.trim())
            .ok()
            .filter(|amount| *amount > Decimal::ZERO)
            .and_then(|amount| Price::new(amount, CurrencyCode::USD));
        if unit_price.is_none() {
            errors.price = Some("Valid price is required".to_string());
        }

        let quantity = self.quantity.trim().parse::<u32>().ok();
        if quantity.is_none() {
            errors.quantity = Some("Valid quantity is required".to_string());
        }

        let description = self.description.trim();
        if description.is_empty() {
            errors.description = Some("Description is required".to_string());
        }

        match (unit_price, quantity) {
            (Some(unit_price), Some(quantity)) if errors.is_empty() => Ok(ItemDraft {
                name: name.to_string(),
                category: category.to_string(),
                unit_price,
                quantity,
                description: description.to_string(),
            }),
            _ => Err(errors),
        }
    }
}
