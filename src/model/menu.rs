//! Menu catalog entries.

use serde::{Deserialize, Serialize};

surrogate_id!(
    /// Type-safe identifier for menu items.
    MenuItemId
);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub image: String,
}

/// Payload for adding a menu item; everything but the name is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    /// A missing or `null` price is recorded as zero.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
}
