use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::data::{OrderItem, RecentOrder};
use crate::image::ImageResolver;
use crate::nav::NavIntent;

pub const CURRENCY: &str = "KWD";
const ORDER_STATUS: &str = "Preparing your order";
const SHORT_ID_LEN: usize = 6;

pub fn price_label(price: f64) -> String {
    format!("{price} {CURRENCY}")
}

fn parse_order_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.naive_local());
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Format an order timestamp as e.g. `Mar 5, 2:07 PM`.
///
/// Timestamps carrying an offset are shown in that offset. Anything that does
/// not parse is returned unchanged.
pub fn format_order_date(raw: &str) -> String {
    match parse_order_date(raw) {
        Some(date) => date.format("%b %-d, %-I:%M %p").to_string(),
        None => {
            tracing::warn!("unparseable order date {raw:?}");
            raw.to_string()
        }
    }
}

/// Last few characters of an order id, the part shown to the customer.
pub fn short_order_id(id: &str) -> &str {
    let skip = id.chars().count().saturating_sub(SHORT_ID_LEN);
    match id.char_indices().nth(skip) {
        Some((start, _)) => &id[start..],
        None => id,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRow {
    pub name: String,
    pub price_label: String,
    pub quantity_label: String,
    pub image: String,
}

impl OrderItemRow {
    pub fn new(item: &OrderItem, images: &ImageResolver) -> Self {
        Self {
            name: item.name.clone(),
            price_label: price_label(item.price),
            quantity_label: format!("x{}", item.quantity),
            image: images.resolve(&item.name, &item.image).to_string(),
        }
    }
}

/// Everything the "Order Confirmed!" screen shows for a placed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: String,
    pub date: String,
    pub restaurant_name: String,
    pub restaurant_image: String,
    pub status: &'static str,
    pub items: Vec<OrderItemRow>,
    pub total_label: String,
}

impl OrderConfirmation {
    pub fn from_order(order: &RecentOrder, images: &ImageResolver) -> Self {
        Self {
            order_id: format!("#{}", short_order_id(&order.id)),
            date: format_order_date(&order.order_date),
            restaurant_name: order.restaurant_name.clone(),
            restaurant_image: order.restaurant_image.clone(),
            status: ORDER_STATUS,
            items: order
                .items
                .iter()
                .map(|item| OrderItemRow::new(item, images))
                .collect(),
            total_label: price_label(order.order_total),
        }
    }

    pub fn close(&self) -> NavIntent {
        NavIntent::PopToTop
    }

    pub fn back_to_home(&self) -> NavIntent {
        NavIntent::PopToTop
    }
}
