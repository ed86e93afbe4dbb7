use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    /// textual range in minutes, e.g. "20-30"
    #[serde(default)]
    pub delivery_time: String,
    /// url to image
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    /// url to image
    #[serde(default)]
    pub image: String,
}

/// A menu item together with the restaurant it is served by.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DishEntry {
    #[serde(flatten)]
    pub item: MenuItem,
    pub restaurant_id: u32,
    pub restaurant_name: String,
}

impl DishEntry {
    pub fn new(restaurant: &Restaurant, item: &MenuItem) -> Self {
        Self {
            item: item.clone(),
            restaurant_id: restaurant.id,
            restaurant_name: restaurant.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "item", rename_all = "camelCase")]
pub enum SearchResult {
    Restaurant(Restaurant),
    MenuItem(DishEntry),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: String,
    pub restaurant_id: u32,
    pub restaurant_name: String,
    pub restaurant_image: String,
    /// ISO-ish timestamp of when the order was placed
    pub order_date: String,
    pub order_total: f64,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAccessEntry {
    pub label: &'static str,
    pub icon: &'static str,
    /// badge count, absent when there is nothing to count
    pub count: Option<usize>,
}
