//! Views derived from the dataset for the Explore screen.
//!
//! Everything here is a pure function over borrowed data: nothing is cached
//! and nothing can fail. Malformed records simply do not match.

use derive_builder::Builder;
use serde::Serialize;

use crate::data::{Category, DishEntry, QuickAccessEntry, RecentOrder, Restaurant, SearchResult};

/// Rating a restaurant needs to count as top rated.
pub const TOP_RATED_MIN_RATING: f64 = 4.5;
/// Restaurants starting delivery within this many minutes count as fast.
pub const FAST_DELIVERY_MINUTES: u32 = 25;

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(default)]
pub struct PopularDishesProps {
    pub min_rating: f64,
    /// how many qualifying restaurants contribute dishes
    pub restaurant_limit: usize,
    pub max_count: usize,
}

impl Default for PopularDishesProps {
    fn default() -> Self {
        Self {
            min_rating: TOP_RATED_MIN_RATING,
            restaurant_limit: 3,
            max_count: 6,
        }
    }
}

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(default)]
pub struct TopRatedProps {
    pub min_rating: f64,
    pub max_count: usize,
}

impl Default for TopRatedProps {
    fn default() -> Self {
        Self {
            min_rating: TOP_RATED_MIN_RATING,
            max_count: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAccessCounts {
    pub categories: usize,
    pub recent: usize,
    pub top_rated: usize,
    pub fast_delivery: usize,
}

/// Substring search over restaurant names/categories and dish
/// names/descriptions, ignoring case.
///
/// A restaurant hit is emitted right before the hits among its own menu. An
/// empty or blank query searches nothing.
pub fn search(query: &str, restaurants: &[Restaurant]) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let query = query.to_lowercase();
    let matches = |text: &str| text.to_lowercase().contains(&query);

    let mut results = Vec::new();
    for restaurant in restaurants {
        if matches(&restaurant.name) || matches(&restaurant.category) {
            results.push(SearchResult::Restaurant(restaurant.clone()));
        }

        results.extend(
            restaurant
                .menu_items
                .iter()
                .filter(|item| matches(&item.name) || matches(&item.description))
                .map(|item| SearchResult::MenuItem(DishEntry::new(restaurant, item))),
        );
    }

    tracing::debug!(query = %query, hits = results.len(), "search");
    results
}

/// Dishes of the first few well rated restaurants, in dataset order.
pub fn popular_dishes(restaurants: &[Restaurant], props: &PopularDishesProps) -> Vec<DishEntry> {
    restaurants
        .iter()
        .filter(|r| r.rating >= props.min_rating)
        .take(props.restaurant_limit)
        .flat_map(|r| r.menu_items.iter().map(move |item| DishEntry::new(r, item)))
        .take(props.max_count)
        .collect()
}

/// Restaurants rated at least `props.min_rating`. Keeps dataset order, the
/// result is never sorted by rating.
pub fn top_rated<'a>(restaurants: &'a [Restaurant], props: &TopRatedProps) -> Vec<&'a Restaurant> {
    restaurants
        .iter()
        .filter(|r| r.rating >= props.min_rating)
        .take(props.max_count)
        .collect()
}

/// Lower bound of a delivery range such as `"20-30"`.
pub fn delivery_lower_bound(range: &str) -> Option<u32> {
    range.split('-').next()?.trim().parse().ok()
}

pub fn quick_access_counts(
    restaurants: &[Restaurant],
    categories: &[Category],
    recent_orders: &[RecentOrder],
    fast_threshold_minutes: u32,
) -> QuickAccessCounts {
    QuickAccessCounts {
        categories: categories.len(),
        recent: recent_orders.len(),
        top_rated: restaurants
            .iter()
            .filter(|r| r.rating >= TOP_RATED_MIN_RATING)
            .count(),
        fast_delivery: restaurants
            .iter()
            .filter(|r| {
                delivery_lower_bound(&r.delivery_time)
                    .is_some_and(|minutes| minutes <= fast_threshold_minutes)
            })
            .count(),
    }
}

/// The Quick Access shortcuts. A zero count carries no badge.
pub fn quick_access(counts: &QuickAccessCounts) -> [QuickAccessEntry; 4] {
    let entry = |label, icon, count: usize| QuickAccessEntry {
        label,
        icon,
        count: (count > 0).then_some(count),
    };
    [
        entry("Cuisines", "utensils", counts.categories),
        entry("Recent", "clock-rotate-left", counts.recent),
        entry("Top Rated", "star", counts.top_rated),
        entry("Fast Delivery", "bolt", counts.fast_delivery),
    ]
}
