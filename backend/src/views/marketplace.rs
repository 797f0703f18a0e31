use serde::{Deserialize, Serialize};

use super::{matches_query, round1, sort_rows, SortDirection, SortValue};
use crate::catalog::Catalog;
use crate::geo::Region;
use crate::metrics::{self, RiskBand, RiskStats};
use crate::models::{LiquidityTier, Listing, PropertyType, TenantType};

/// Maximum rows the lots table renders.
pub const LOTS_TABLE_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LotsSortKey {
    Id,
    City,
    Country,
    Type,
    Yield,
    Risk,
    Progress,
    MinTicket,
    DaysLeft,
    BusinessValue,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotsQuery {
    pub region: Option<Region>,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    pub q: Option<String>,
    pub sort: Option<LotsSortKey>,
    pub dir: Option<SortDirection>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LotRow {
    pub id: String,
    pub owner_id: String,
    pub owner_name: String,
    pub property_type: PropertyType,
    pub country: String,
    pub city: String,
    pub address: String,
    pub min_ticket: f64,
    pub business_value: f64,
    pub rent_monthly: f64,
    pub rent_yearly: f64,
    pub raise_target: f64,
    pub raise_collected: f64,
    pub days_left: u32,
    pub tenant_type: TenantType,
    pub liquidity: LiquidityTier,
    pub yield_pct: f64,
    pub yield_label: String,
    pub risk_coefficient: f64,
    pub risk_band: RiskBand,
    pub progress_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LotsView {
    pub rows: Vec<LotRow>,
    /// Matches before the table cap was applied.
    pub total: usize,
    pub risk: RiskStats,
    /// Countries selectable for the chosen region, or all of them.
    pub countries: Vec<&'static str>,
}

pub(crate) fn risk_stats<'a, I>(listings: I) -> RiskStats
where
    I: IntoIterator<Item = &'a Listing>,
{
    RiskStats::from_coefficients(
        listings
            .into_iter()
            .map(|l| metrics::risk_coefficient(l.sale_percent)),
    )
}

pub(crate) fn lot_row(catalog: &Catalog, listing: &Listing, risk: &RiskStats) -> LotRow {
    let yield_pct = metrics::yield_pct(listing.rent_yearly, listing.business_value);
    let risk_coefficient = metrics::risk_coefficient(listing.sale_percent);
    LotRow {
        id: listing.id.clone(),
        owner_id: listing.owner_id.clone(),
        owner_name: catalog.owner_name(&listing.owner_id).to_string(),
        property_type: listing.property_type,
        country: listing.country.clone(),
        city: listing.city.clone(),
        address: listing.address.clone(),
        min_ticket: listing.min_ticket,
        business_value: listing.business_value,
        rent_monthly: listing.rent_monthly,
        rent_yearly: listing.rent_yearly,
        raise_target: listing.raise_target,
        raise_collected: listing.raise_collected,
        days_left: listing.days_left,
        tenant_type: listing.tenant_type,
        liquidity: listing.liquidity,
        yield_pct: round1(yield_pct),
        yield_label: metrics::format_yield(yield_pct),
        risk_coefficient,
        risk_band: risk.band(risk_coefficient),
        progress_pct: metrics::progress_pct(listing.raise_collected, listing.raise_target),
    }
}

fn sort_value(row: &LotRow, key: LotsSortKey) -> SortValue {
    match key {
        LotsSortKey::Id => SortValue::Text(row.id.clone()),
        LotsSortKey::City => SortValue::Text(row.city.clone()),
        LotsSortKey::Country => SortValue::Text(row.country.clone()),
        LotsSortKey::Type => SortValue::Text(row.property_type.label().to_string()),
        LotsSortKey::Yield => SortValue::Number(row.yield_pct),
        LotsSortKey::Risk => SortValue::Number(row.risk_coefficient),
        LotsSortKey::Progress => SortValue::Number(row.progress_pct),
        LotsSortKey::MinTicket => SortValue::Number(row.min_ticket),
        LotsSortKey::DaysLeft => SortValue::Number(row.days_left as f64),
        LotsSortKey::BusinessValue => SortValue::Number(row.business_value),
    }
}

/// Whether a listing passes every active filter of the query.
pub fn matches(catalog: &Catalog, listing: &Listing, query: &LotsQuery) -> bool {
    if let Some(region) = query.region {
        if !region.contains(&listing.country) {
            return false;
        }
    }
    if let Some(country) = query.country.as_deref().filter(|c| !c.is_empty()) {
        if !listing.country.eq_ignore_ascii_case(country) {
            return false;
        }
    }
    if let Some(property_type) = query.property_type {
        if listing.property_type != property_type {
            return false;
        }
    }
    matches_query(
        query.q.as_deref(),
        &[
            listing.id.as_str(),
            listing.city.as_str(),
            listing.address.as_str(),
            listing.country.as_str(),
            catalog.owner_name(&listing.owner_id),
        ],
    )
}

pub fn lots_view(catalog: &Catalog, query: &LotsQuery) -> LotsView {
    let risk = risk_stats(&catalog.listings);

    let mut rows: Vec<LotRow> = catalog
        .listings
        .iter()
        .filter(|l| matches(catalog, l, query))
        .map(|l| lot_row(catalog, l, &risk))
        .collect();

    if let Some(key) = query.sort {
        sort_rows(&mut rows, |r| sort_value(r, key), query.dir.unwrap_or_default());
    }

    let total = rows.len();
    rows.truncate(LOTS_TABLE_LIMIT);

    let countries = match query.region {
        Some(region) => region.countries(),
        None => crate::geo::all_countries().collect(),
    };

    LotsView { rows, total, risk, countries }
}
