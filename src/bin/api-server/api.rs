use actix_web::{web, HttpResponse};
use meal_explore::{
    dataset::{Dataset, RestaurantSearchProps},
    explore,
    order::OrderConfirmation,
    screen::ExploreScreen,
};

pub(super) struct ApiState {
    dataset: Dataset,
}

impl ApiState {
    pub(super) fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

#[derive(serde::Serialize)]
struct ErrJsonResp {
    message: String,
}

fn not_found(message: String) -> HttpResponse {
    tracing::warn!("{message}");
    HttpResponse::NotFound().json(ErrJsonResp { message })
}

pub(super) fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(restaurants)
        .service(restaurant)
        .service(explore_view)
        .service(search)
        .service(popular)
        .service(top_rated)
        .service(quick_access)
        .service(order_confirmation);
}

#[actix_web::get("/api/v1/restaurants")]
async fn restaurants(data: web::Data<ApiState>) -> HttpResponse {
    HttpResponse::Ok().json(data.dataset.get_restaurant(RestaurantSearchProps::All))
}

#[derive(serde::Deserialize)]
struct RestaurantPath {
    id: u32,
}

#[actix_web::get("/api/v1/restaurants/{id}")]
async fn restaurant(data: web::Data<ApiState>, path: web::Path<RestaurantPath>) -> HttpResponse {
    let found = data
        .dataset
        .get_restaurant(RestaurantSearchProps::Id(path.id));
    match found.first() {
        Some(restaurant) => HttpResponse::Ok().json(restaurant),
        None => not_found(format!("no restaurant with id {}", path.id)),
    }
}

#[derive(serde::Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[actix_web::get("/api/v1/explore")]
async fn explore_view(data: web::Data<ApiState>, query: web::Query<SearchQuery>) -> HttpResponse {
    let mut screen = ExploreScreen::new();
    screen.set_query(query.into_inner().q);
    HttpResponse::Ok().json(screen.view(&data.dataset))
}

#[actix_web::get("/api/v1/search")]
async fn search(data: web::Data<ApiState>, query: web::Query<SearchQuery>) -> HttpResponse {
    HttpResponse::Ok().json(explore::search(&query.q, data.dataset.restaurants()))
}

#[derive(serde::Deserialize)]
struct PopularQuery {
    min_rating: Option<f64>,
    restaurant_limit: Option<usize>,
    max_count: Option<usize>,
}

#[actix_web::get("/api/v1/popular")]
async fn popular(data: web::Data<ApiState>, query: web::Query<PopularQuery>) -> HttpResponse {
    let mut builder = explore::PopularDishesPropsBuilder::default();
    if let Some(min_rating) = query.min_rating {
        builder.min_rating(min_rating);
    }
    if let Some(limit) = query.restaurant_limit {
        builder.restaurant_limit(limit);
    }
    if let Some(max_count) = query.max_count {
        builder.max_count(max_count);
    }

    // every field has a default, so building cannot fail
    let props = builder.build().unwrap_or_default();
    HttpResponse::Ok().json(explore::popular_dishes(data.dataset.restaurants(), &props))
}

#[derive(serde::Deserialize)]
struct TopRatedQuery {
    min_rating: Option<f64>,
    max_count: Option<usize>,
}

#[actix_web::get("/api/v1/top-rated")]
async fn top_rated(data: web::Data<ApiState>, query: web::Query<TopRatedQuery>) -> HttpResponse {
    let mut builder = explore::TopRatedPropsBuilder::default();
    if let Some(min_rating) = query.min_rating {
        builder.min_rating(min_rating);
    }
    if let Some(max_count) = query.max_count {
        builder.max_count(max_count);
    }

    let props = builder.build().unwrap_or_default();
    HttpResponse::Ok().json(explore::top_rated(data.dataset.restaurants(), &props))
}

#[actix_web::get("/api/v1/quick-access")]
async fn quick_access(data: web::Data<ApiState>) -> HttpResponse {
    let dataset = &data.dataset;
    let counts = explore::quick_access_counts(
        dataset.restaurants(),
        dataset.categories(),
        dataset.recent_orders(),
        explore::FAST_DELIVERY_MINUTES,
    );
    HttpResponse::Ok().json(explore::quick_access(&counts))
}

#[derive(serde::Deserialize)]
struct OrderPath {
    id: String,
}

#[actix_web::get("/api/v1/orders/{id}/confirmation")]
async fn order_confirmation(data: web::Data<ApiState>, path: web::Path<OrderPath>) -> HttpResponse {
    match data.dataset.get_order(&path.id) {
        Some(order) => {
            HttpResponse::Ok().json(OrderConfirmation::from_order(order, data.dataset.images()))
        }
        None => not_found(format!("no order with id {}", path.id)),
    }
}
