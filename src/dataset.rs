use std::collections::{HashMap, HashSet};

use anyhow::Context;
use serde::Deserialize;

use crate::data::{Category, RecentOrder, Restaurant};
use crate::image::ImageResolver;

const BUNDLED_DATASET: &str = include_str!("../data/dataset.json");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    restaurants: Vec<Restaurant>,
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    recent_orders: Vec<RecentOrder>,
    #[serde(default)]
    dish_images: HashMap<String, String>,
}

#[derive(Clone)]
pub enum RestaurantSearchProps {
    All,
    Id(u32),
}

/// The read-only data every screen is derived from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    restaurants: Vec<Restaurant>,
    categories: Vec<Category>,
    recent_orders: Vec<RecentOrder>,
    images: ImageResolver,
}

impl Dataset {
    /// Build a dataset, checking that restaurant ids are unique and that every
    /// recent order points at a known restaurant.
    pub fn new(
        restaurants: Vec<Restaurant>,
        categories: Vec<Category>,
        recent_orders: Vec<RecentOrder>,
        images: ImageResolver,
    ) -> anyhow::Result<Self> {
        let mut ids = HashSet::with_capacity(restaurants.len());
        for restaurant in &restaurants {
            anyhow::ensure!(
                ids.insert(restaurant.id),
                "duplicate restaurant id {} ({})",
                restaurant.id,
                restaurant.name
            );
        }

        for order in &recent_orders {
            anyhow::ensure!(
                ids.contains(&order.restaurant_id),
                "order {} refers to unknown restaurant {}",
                order.id,
                order.restaurant_id
            );
        }

        Ok(Self {
            restaurants,
            categories,
            recent_orders,
            images,
        })
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let raw: RawDataset =
            serde_json::from_str(json).with_context(|| "fail to parse dataset")?;
        let dataset = Self::new(
            raw.restaurants,
            raw.categories,
            raw.recent_orders,
            ImageResolver::new(raw.dish_images),
        )?;
        tracing::info!(
            restaurants = dataset.restaurants.len(),
            categories = dataset.categories.len(),
            recent_orders = dataset.recent_orders.len(),
            images = dataset.images.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> anyhow::Result<Self> {
        Self::from_json(BUNDLED_DATASET).with_context(|| "bundled dataset is broken")
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn recent_orders(&self) -> &[RecentOrder] {
        &self.recent_orders
    }

    pub fn images(&self) -> &ImageResolver {
        &self.images
    }

    pub fn get_restaurant(&self, props: RestaurantSearchProps) -> Vec<&Restaurant> {
        match props {
            RestaurantSearchProps::All => self.restaurants.iter().collect(),
            RestaurantSearchProps::Id(id) => {
                self.restaurants.iter().filter(|r| r.id == id).collect()
            }
        }
    }

    pub fn get_order(&self, id: &str) -> Option<&RecentOrder> {
        self.recent_orders.iter().find(|order| order.id == id)
    }
}
