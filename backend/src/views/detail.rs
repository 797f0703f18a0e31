use chrono::Datelike;
use serde::Serialize;

use super::marketplace::{lot_row, risk_stats, LotRow};
use crate::catalog::{Catalog, SHARES_PER_LISTING};
use crate::generator;
use crate::models::{EventItem, NewsItem, Owner, YieldYearData};

const DETAIL_NEWS: usize = 4;
const DETAIL_EVENTS: usize = 6;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDetail {
    pub lot: LotRow,
    pub owner: Option<Owner>,
    pub nav_per_share: f64,
    pub investors: u32,
    pub yield_history: Vec<YieldYearData>,
    pub news: Vec<NewsItem>,
    pub events: Vec<EventItem>,
    /// Other lots of the same owner.
    pub related: Vec<String>,
}

/// Detail page of one lot. `None` when the id is unknown.
///
/// Everything derived from the id (history, news, events, investor count)
/// is stable for that id; the listing itself is whatever the catalog holds.
pub fn object_detail(catalog: &Catalog, id: &str) -> Option<ObjectDetail> {
    let listing = catalog.listing(id)?;
    let anchor = catalog.anchor;
    let seed = generator::seed_from_id(&listing.id);
    let risk = risk_stats(&catalog.listings);

    Some(ObjectDetail {
        lot: lot_row(catalog, listing, &risk),
        owner: catalog.owner(&listing.owner_id).cloned(),
        nav_per_share: listing.business_value / SHARES_PER_LISTING,
        investors: generator::investor_count(seed),
        yield_history: generator::generate_yield_data(seed, anchor.year()),
        news: generator::generate_listing_news(seed, DETAIL_NEWS, anchor),
        events: generator::generate_events(seed, DETAIL_EVENTS, anchor),
        related: catalog
            .listings_by_owner(&listing.owner_id)
            .into_iter()
            .filter(|l| l.id != listing.id)
            .map(|l| l.id.clone())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogParams;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
    }

    fn catalog(seed: u64) -> Catalog {
        let params = CatalogParams { owners: 5, max_listings_per_owner: 4, anchor: anchor() };
        Catalog::generate(&mut StdRng::seed_from_u64(seed), &params)
    }

    #[test]
    fn unknown_id_has_no_detail() {
        assert!(object_detail(&catalog(1), "L-0").is_none());
    }

    #[test]
    fn detail_joins_owner_and_history() {
        let catalog = catalog(2);
        let listing = &catalog.listings[0];
        let detail = object_detail(&catalog, &listing.id).unwrap();
        assert_eq!(detail.lot.id, listing.id);
        assert_eq!(detail.owner.unwrap().id, listing.owner_id);
        assert_eq!(detail.yield_history.len(), generator::YIELD_YEARS);
        assert_eq!(detail.yield_history.last().unwrap().year, 2026);
        assert_eq!(detail.news.len(), DETAIL_NEWS);
        assert_eq!(detail.events.len(), DETAIL_EVENTS);
        assert!(!detail.related.contains(&listing.id));
    }

    #[test]
    fn derived_series_depend_only_on_the_id() {
        // Two unrelated catalogs both contain L-1001, with different attributes.
        let a = object_detail(&catalog(3), "L-1001").unwrap();
        let b = object_detail(&catalog(4), "L-1001").unwrap();
        assert_eq!(a.yield_history, b.yield_history);
        assert_eq!(a.news, b.news);
        assert_eq!(a.events, b.events);
        assert_eq!(a.investors, b.investors);
    }

    #[test]
    fn dates_follow_the_catalog_anchor() {
        let anchor = NaiveDate::from_ymd_opt(2019, 3, 15).unwrap();
        let params = CatalogParams { owners: 2, max_listings_per_owner: 2, anchor };
        let catalog = Catalog::generate(&mut StdRng::seed_from_u64(6), &params);
        let detail = object_detail(&catalog, "L-1001").unwrap();
        assert_eq!(detail.yield_history.last().unwrap().year, 2019);
        assert!(detail.news.iter().all(|n| n.published <= anchor));
        assert!(detail.events.iter().all(|e| e.date <= anchor));
    }
}
