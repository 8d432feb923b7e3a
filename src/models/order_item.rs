// src/models/order_item.rs
use serde::{Deserialize, Serialize};

use super::review::ReviewTarget;

/// One line of a delivered order, as handed to the review form by its parent page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub item_id: u64,
    pub order_id: u64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub image_full_url: Option<String>,
    #[serde(default)]
    pub item_details: Option<ItemDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ItemDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl OrderItem {
    pub fn target(&self) -> ReviewTarget {
        ReviewTarget {
            item_id: self.item_id,
            order_id: self.order_id,
        }
    }

    pub fn name(&self) -> &str {
        self.item_details
            .as_ref()
            .and_then(|d| d.name.as_deref())
            .unwrap_or_default()
    }

    pub fn price(&self) -> Option<f64> {
        self.item_details.as_ref().and_then(|d| d.price)
    }

    /// Image URL, `None` when absent or blank.
    pub fn image(&self) -> Option<&str> {
        self.image_full_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}
