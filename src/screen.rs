//! View models for the Explore screen and the menu item detail header.

use serde::Serialize;

use crate::data::{DishEntry, MenuItem, QuickAccessEntry, Restaurant, SearchResult};
use crate::dataset::Dataset;
use crate::explore::{self, PopularDishesProps, TopRatedProps};
use crate::image::ImageResolver;
use crate::nav::NavIntent;
use crate::order::price_label;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultRow {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub intent: NavIntent,
}

impl SearchResultRow {
    pub fn new(result: &SearchResult, images: &ImageResolver) -> Self {
        let (title, subtitle, image) = match result {
            SearchResult::Restaurant(r) => (&r.name, r.category.clone(), r.image.clone()),
            SearchResult::MenuItem(dish) => (
                &dish.item.name,
                format!("From {}", dish.restaurant_name),
                images.resolve(&dish.item.name, &dish.item.image).to_string(),
            ),
        };
        Self {
            title: title.clone(),
            subtitle,
            image,
            intent: result.intent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularDishCard {
    pub name: String,
    pub price_label: String,
    pub image: String,
    pub intent: NavIntent,
}

impl PopularDishCard {
    pub fn new(dish: &DishEntry, images: &ImageResolver) -> Self {
        Self {
            name: dish.item.name.clone(),
            price_label: price_label(dish.item.price),
            image: images.resolve(&dish.item.name, &dish.item.image).to_string(),
            intent: NavIntent::menu_item(dish),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRatedCard {
    pub name: String,
    pub category: String,
    pub rating: f64,
    pub delivery_time: String,
    pub image: String,
    pub intent: NavIntent,
}

impl TopRatedCard {
    pub fn new(restaurant: &Restaurant) -> Self {
        Self {
            name: restaurant.name.clone(),
            category: restaurant.category.clone(),
            rating: restaurant.rating,
            delivery_time: restaurant.delivery_time.clone(),
            image: restaurant.image.clone(),
            intent: NavIntent::restaurant(restaurant),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemDetailHeader {
    pub image: String,
}

impl MenuItemDetailHeader {
    pub fn new(item: &MenuItem, images: &ImageResolver) -> Self {
        Self {
            image: images.resolve(&item.name, &item.image).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ExploreView {
    Results {
        results: Vec<SearchResultRow>,
    },
    #[serde(rename_all = "camelCase")]
    Home {
        quick_access: [QuickAccessEntry; 4],
        popular_dishes: Vec<PopularDishCard>,
        top_rated: Vec<TopRatedCard>,
    },
}

/// State of the Explore screen: just the text in the search box.
#[derive(Debug, Clone, Default)]
pub struct ExploreScreen {
    query: String,
}

impl ExploreScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Whether the clear button and the result list are shown. Any text
    /// counts, a blank query shows an empty result list.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn open_map(&self) -> NavIntent {
        NavIntent::Map
    }

    pub fn view(&self, dataset: &Dataset) -> ExploreView {
        let images = dataset.images();
        if self.has_query() {
            let results = explore::search(&self.query, dataset.restaurants())
                .iter()
                .map(|result| SearchResultRow::new(result, images))
                .collect();
            return ExploreView::Results { results };
        }

        let counts = explore::quick_access_counts(
            dataset.restaurants(),
            dataset.categories(),
            dataset.recent_orders(),
            explore::FAST_DELIVERY_MINUTES,
        );
        ExploreView::Home {
            quick_access: explore::quick_access(&counts),
            popular_dishes: explore::popular_dishes(
                dataset.restaurants(),
                &PopularDishesProps::default(),
            )
            .iter()
            .map(|dish| PopularDishCard::new(dish, images))
            .collect(),
            top_rated: explore::top_rated(dataset.restaurants(), &TopRatedProps::default())
                .into_iter()
                .map(TopRatedCard::new)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::explore::tests::sample;

    fn dataset() -> Dataset {
        let images = ImageResolver::new(HashMap::from([(
            "Carbonara".to_string(),
            "assets/dishes/carbonara.png".to_string(),
        )]));
        Dataset::new(sample(), Vec::new(), Vec::new(), images).unwrap()
    }

    #[test]
    fn test_home_view_without_query() {
        let dataset = dataset();
        let screen = ExploreScreen::new();
        assert!(!screen.has_query());

        let ExploreView::Home {
            quick_access,
            popular_dishes,
            top_rated,
        } = screen.view(&dataset)
        else {
            panic!("expected the home view");
        };
        assert_eq!(quick_access[2].count, Some(4));
        // the dataset has no categories, so that shortcut shows no badge
        assert_eq!(quick_access[0].count, None);
        assert_eq!(popular_dishes.len(), 6);
        assert_eq!(popular_dishes[0].image, "assets/dishes/carbonara.png");
        assert_eq!(popular_dishes[0].price_label, "2.5 KWD");
        let names: Vec<_> = top_rated.iter().map(|card| card.name.as_str()).collect();
        assert_eq!(names, vec!["Pasta Place", "Sushi Spot", "Pizza Italia"]);
    }

    #[test]
    fn test_results_view_rows() {
        let dataset = dataset();
        let mut screen = ExploreScreen::new();
        screen.set_query("carb");

        let ExploreView::Results { results } = screen.view(&dataset) else {
            panic!("expected the result list");
        };
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Carbonara");
        assert_eq!(results[0].subtitle, "From Pasta Place");
        assert_eq!(results[0].image, "assets/dishes/carbonara.png");
        assert!(matches!(
            results[0].intent,
            NavIntent::MenuItemDetail { restaurant_id: 1, .. }
        ));

        screen.set_query("japanese");
        let ExploreView::Results { results } = screen.view(&dataset) else {
            panic!("expected the result list");
        };
        assert_eq!(results[0].title, "Sushi Spot");
        assert_eq!(results[0].subtitle, "Japanese");
        assert_eq!(results[0].image, "https://img.example/r3.jpg");
    }

    #[test]
    fn test_blank_query_shows_empty_results() {
        let dataset = dataset();
        let mut screen = ExploreScreen::new();
        screen.set_query("   ");
        assert_eq!(
            screen.view(&dataset),
            ExploreView::Results {
                results: Vec::new()
            }
        );

        screen.clear();
        assert_eq!(screen.query(), "");
        assert!(matches!(screen.view(&dataset), ExploreView::Home { .. }));
        assert_eq!(screen.open_map(), NavIntent::Map);
    }

    #[test]
    fn test_menu_item_detail_header() {
        let images = ImageResolver::default();
        let restaurants = sample();
        let item = &restaurants[0].menu_items[1];
        assert_eq!(
            MenuItemDetailHeader::new(item, &images).image,
            "https://img.example/12.jpg"
        );
    }
}
