use serde::Serialize;

use crate::data::{DishEntry, Restaurant, SearchResult};

/// Where the app should go next. Screens only emit these, the host app
/// performs the actual navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", content = "params")]
pub enum NavIntent {
    #[serde(rename_all = "camelCase")]
    MenuItemDetail {
        menu_item: DishEntry,
        restaurant_id: u32,
    },
    RestaurantDetail {
        restaurant: Restaurant,
    },
    Map,
    PopToTop,
}

impl NavIntent {
    pub fn menu_item(dish: &DishEntry) -> Self {
        Self::MenuItemDetail {
            menu_item: dish.clone(),
            restaurant_id: dish.restaurant_id,
        }
    }

    pub fn restaurant(restaurant: &Restaurant) -> Self {
        Self::RestaurantDetail {
            restaurant: restaurant.clone(),
        }
    }
}

impl SearchResult {
    /// The intent emitted when this result is tapped.
    pub fn intent(&self) -> NavIntent {
        match self {
            Self::Restaurant(restaurant) => NavIntent::restaurant(restaurant),
            Self::MenuItem(dish) => NavIntent::menu_item(dish),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MenuItem;

    #[test]
    fn test_menu_item_intent_carries_restaurant_id() {
        let restaurant = Restaurant {
            id: 7,
            name: "Pasta Place".to_string(),
            category: "Italian".to_string(),
            rating: 4.6,
            delivery_time: "15-25".to_string(),
            image: String::new(),
            menu_items: vec![MenuItem {
                id: 1,
                name: "Carbonara".to_string(),
                description: "creamy pasta".to_string(),
                price: 3.5,
                image: String::new(),
            }],
        };
        let dish = DishEntry::new(&restaurant, &restaurant.menu_items[0]);

        let intent = SearchResult::MenuItem(dish).intent();
        let NavIntent::MenuItemDetail { restaurant_id, menu_item } = &intent else {
            panic!("unexpected intent {intent:?}");
        };
        assert_eq!(*restaurant_id, 7);
        assert_eq!(menu_item.item.name, "Carbonara");

        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["screen"], "MenuItemDetail");
        assert_eq!(json["params"]["restaurantId"], 7);
        assert_eq!(json["params"]["menuItem"]["restaurantName"], "Pasta Place");

        let json = serde_json::to_value(NavIntent::Map).unwrap();
        assert_eq!(json["screen"], "Map");
    }
}
