//! Deterministic derived series for a single entity.
//!
//! Every value here comes from integer formulas of the form
//! `(seed * k + offset) % modulus`, where the seed is the digits of the
//! entity id. The same id always produces the same history, news and
//! events, even though the catalog itself is regenerated randomly on
//! every start.

use chrono::{Duration, NaiveDate};

use crate::models::{EventItem, EventKind, NewsItem, YieldYearData};

/// Number of yearly points in a yield history.
pub const YIELD_YEARS: usize = 9;

const NEWS_TEMPLATES: &[(&str, &str, &str)] = &[
    ("operations", "Quarterly rent received in full", "The tenant settled the quarter without delays; payouts follow the usual schedule."),
    ("valuation", "Independent appraisal completed", "An external appraiser confirmed the business value within the expected range."),
    ("tenant", "Lease extended for three more years", "The anchor tenant signed an extension with an indexation clause."),
    ("operations", "Facade renovation finished", "Planned maintenance on the building facade is complete and within budget."),
    ("market", "District footfall keeps growing", "New transport links raised weekday footfall around the property."),
    ("tenant", "Tenant opened a second location nearby", "The tenant's expansion in the district points to stable demand."),
    ("valuation", "Insurance policy renewed", "Property insurance was renewed with an improved coverage limit."),
];

fn mix(seed: u64, k: u64, offset: u64, modulus: u64) -> u64 {
    seed.wrapping_mul(k).wrapping_add(offset) % modulus
}

/// Extracts the numeric seed of an id by dropping every non-digit.
///
/// Ids without digits, or with more digits than fit in a `u64`, seed as 0.
pub fn seed_from_id(id: &str) -> u64 {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Yearly yield history ending at `end_year`, oldest first.
pub fn generate_yield_data(seed: u64, end_year: i32) -> Vec<YieldYearData> {
    (0..YIELD_YEARS as u64)
        .map(|i| {
            let tenths = 40 + mix(seed, 7, i * 13 + 3, 80);
            YieldYearData {
                year: end_year - (YIELD_YEARS as i32 - 1) + i as i32,
                yield_pct: tenths as f64 / 10.0,
                income: (mix(seed, 131, i * 977, 9000) + 1000) * 100,
                investors_in: (mix(seed, 3, i * 11, 40) + 5) as u32,
                investors_out: mix(seed, 5, i * 7, 15) as u32,
            }
        })
        .collect()
}

/// News about one listing, newest first, dated back from `anchor`.
pub fn generate_listing_news(seed: u64, count: usize, anchor: NaiveDate) -> Vec<NewsItem> {
    let templates = NEWS_TEMPLATES.len() as u64;
    (0..count as u64)
        .map(|i| {
            let (category, title, summary) = NEWS_TEMPLATES[mix(seed, 17, i * 5 + 1, templates) as usize];
            let days_back = i * 30 + mix(seed, 3, i * 29 + 2, 25);
            NewsItem {
                slug: format!("lot-{seed}-{i}"),
                title: title.to_string(),
                summary: summary.to_string(),
                category: category.to_string(),
                published: anchor - Duration::days(days_back as i64),
            }
        })
        .collect()
}

/// Event feed of one listing, newest first, dated back from `anchor`.
pub fn generate_events(seed: u64, count: usize, anchor: NaiveDate) -> Vec<EventItem> {
    (0..count as u64)
        .map(|i| {
            let kind = match mix(seed, 11, i * 3, 4) {
                0 => EventKind::RentPayment,
                1 => EventKind::DividendPayout,
                2 => EventKind::ValuationUpdate,
                _ => EventKind::TenantRenewal,
            };
            let title = match kind {
                EventKind::RentPayment => "Rent payment received",
                EventKind::DividendPayout => "Dividends paid to investors",
                EventKind::ValuationUpdate => "Valuation updated",
                EventKind::TenantRenewal => "Tenant renewed the lease",
            };
            let days_back = i * 14 + mix(seed, 5, i, 7);
            EventItem {
                kind,
                title: title.to_string(),
                amount: (mix(seed, 73, i * 389, 500) + 50) * 100,
                date: anchor - Duration::days(days_back as i64),
            }
        })
        .collect()
}

pub fn investor_count(seed: u64) -> u32 {
    mix(seed, 37, 11, 400) as u32 + 20
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
    }

    #[test]
    fn seed_keeps_only_digits() {
        assert_eq!(seed_from_id("L-1042"), 1042);
        assert_eq!(seed_from_id("a1b2c3"), 123);
        assert_eq!(seed_from_id("owner"), 0);
        assert_eq!(seed_from_id("99999999999999999999999"), 0);
    }

    #[test]
    fn yield_history_is_pure() {
        let first = generate_yield_data(1042, 2026);
        let second = generate_yield_data(1042, 2026);
        assert_eq!(first, second);
        assert_ne!(first, generate_yield_data(1043, 2026));
    }

    #[test]
    fn yield_history_covers_nine_years() {
        let data = generate_yield_data(7, 2026);
        assert_eq!(data.len(), YIELD_YEARS);
        assert_eq!(data.first().unwrap().year, 2018);
        assert_eq!(data.last().unwrap().year, 2026);
        for point in &data {
            assert!(point.yield_pct >= 4.0 && point.yield_pct < 12.0);
            assert!(point.income >= 100_000);
            assert!(point.investors_in >= 5);
            assert!(point.investors_out < 15);
        }
    }

    #[test]
    fn huge_seeds_wrap_instead_of_overflowing() {
        let data = generate_yield_data(u64::MAX, 2026);
        assert_eq!(data.len(), YIELD_YEARS);
        assert!(investor_count(u64::MAX) >= 20);
    }

    #[test]
    fn news_and_events_walk_back_in_time() {
        let news = generate_listing_news(1042, 4, anchor());
        assert_eq!(news.len(), 4);
        assert!(news.windows(2).all(|w| w[0].published > w[1].published));
        assert!(news.iter().all(|n| n.published <= anchor()));
        assert_eq!(news, generate_listing_news(1042, 4, anchor()));

        let events = generate_events(1042, 6, anchor());
        assert_eq!(events.len(), 6);
        assert!(events.windows(2).all(|w| w[0].date > w[1].date));
        assert!(events.iter().all(|e| e.amount >= 5_000));
    }
}
