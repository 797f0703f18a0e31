use serde::{Deserialize, Serialize};

use super::{matches_query, round1, sort_rows, SortDirection, SortValue};
use crate::catalog::Catalog;
use crate::geo::Region;
use crate::metrics::{self, NavIndicator};
use crate::models::{OrderSide, PropertyType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderSortKey {
    Listing,
    Price,
    Nav,
    Discount,
    Shares,
    Total,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookQuery {
    pub side: Option<OrderSide>,
    pub region: Option<Region>,
    pub country: Option<String>,
    pub q: Option<String>,
    pub sort: Option<OrderSortKey>,
    pub dir: Option<SortDirection>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: String,
    pub listing_id: String,
    pub city: String,
    pub country: String,
    pub property_type: PropertyType,
    pub side: OrderSide,
    pub shares: u32,
    pub price_per_share: f64,
    pub nav_per_share: f64,
    pub total: f64,
    pub discount_pct: f64,
    pub indicator: NavIndicator,
    pub trader: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookSummary {
    pub orders: usize,
    /// Lowest asking price among sell orders.
    pub best_ask: Option<f64>,
    /// Highest bid among buy orders.
    pub best_bid: Option<f64>,
    pub avg_discount_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookView {
    pub rows: Vec<OrderRow>,
    pub summary: OrderBookSummary,
}

fn sort_value(row: &OrderRow, key: OrderSortKey) -> SortValue {
    match key {
        OrderSortKey::Listing => SortValue::Text(row.listing_id.clone()),
        OrderSortKey::Price => SortValue::Number(row.price_per_share),
        OrderSortKey::Nav => SortValue::Number(row.nav_per_share),
        OrderSortKey::Discount => SortValue::Number(row.discount_pct),
        OrderSortKey::Shares => SortValue::Number(row.shares as f64),
        OrderSortKey::Total => SortValue::Number(row.total),
    }
}

fn summarize(rows: &[OrderRow]) -> OrderBookSummary {
    let best_ask = rows
        .iter()
        .filter(|r| r.side == OrderSide::Sell)
        .map(|r| r.price_per_share)
        .fold(None, |best: Option<f64>, p| Some(best.map_or(p, |b| b.min(p))));
    let best_bid = rows
        .iter()
        .filter(|r| r.side == OrderSide::Buy)
        .map(|r| r.price_per_share)
        .fold(None, |best: Option<f64>, p| Some(best.map_or(p, |b| b.max(p))));
    let avg_discount_pct = if rows.is_empty() {
        0.0
    } else {
        round1(rows.iter().map(|r| r.discount_pct).sum::<f64>() / rows.len() as f64)
    };
    OrderBookSummary { orders: rows.len(), best_ask, best_bid, avg_discount_pct }
}

/// P2P order book joined with listings. Orders of unknown listings are dropped.
pub fn order_book(catalog: &Catalog, query: &OrderBookQuery) -> OrderBookView {
    let mut rows: Vec<OrderRow> = catalog
        .orders
        .iter()
        .filter(|o| query.side.map_or(true, |side| o.side == side))
        .filter_map(|order| {
            let listing = catalog.listing(&order.listing_id)?;
            if let Some(region) = query.region {
                if !region.contains(&listing.country) {
                    return None;
                }
            }
            if let Some(country) = query.country.as_deref().filter(|c| !c.is_empty()) {
                if !listing.country.eq_ignore_ascii_case(country) {
                    return None;
                }
            }
            if !matches_query(
                query.q.as_deref(),
                &[order.id.as_str(), listing.id.as_str(), listing.city.as_str(), order.trader.as_str()],
            ) {
                return None;
            }
            let discount_pct = metrics::nav_discount_pct(order.price_per_share, order.nav_per_share);
            Some(OrderRow {
                id: order.id.clone(),
                listing_id: listing.id.clone(),
                city: listing.city.clone(),
                country: listing.country.clone(),
                property_type: listing.property_type,
                side: order.side,
                shares: order.shares,
                price_per_share: order.price_per_share,
                nav_per_share: order.nav_per_share,
                total: order.price_per_share * order.shares as f64,
                discount_pct: round1(discount_pct),
                indicator: NavIndicator::from_discount(discount_pct),
                trader: order.trader.clone(),
            })
        })
        .collect();

    if let Some(key) = query.sort {
        sort_rows(&mut rows, |r| sort_value(r, key), query.dir.unwrap_or_default());
    }

    let summary = summarize(&rows);
    OrderBookView { rows, summary }
}
