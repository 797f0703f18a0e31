use serde::Serialize;

use super::marketplace::{lot_row, risk_stats, LotRow};
use super::round1;
use crate::catalog::Catalog;
use crate::generator;
use crate::metrics;
use crate::models::{DocItem, NotificationItem, Owner, PropertyType, Transaction};
use crate::session::Wallet;

/// Transactions shown on the investor dashboard.
pub const RECENT_TRANSACTIONS: usize = 10;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    pub listing_id: String,
    pub city: String,
    pub country: String,
    pub property_type: PropertyType,
    pub invested: f64,
    pub shares: u32,
    pub yield_pct: f64,
    pub monthly_income: f64,
    pub progress_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub objects: usize,
    pub invested: f64,
    /// Yield weighted by the amount invested in each lot.
    pub weighted_yield_pct: f64,
    pub monthly_income: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorDashboard {
    pub wallet: Wallet,
    pub holdings: Vec<HoldingRow>,
    pub totals: PortfolioTotals,
    pub transactions: Vec<Transaction>,
    pub notifications: Vec<NotificationItem>,
    pub unread: usize,
    pub docs: Vec<DocItem>,
}

pub fn investor_dashboard(catalog: &Catalog, wallet: Wallet) -> InvestorDashboard {
    // Rows keep the unrounded yield alongside for the portfolio average.
    let positions: Vec<(HoldingRow, f64)> = catalog
        .holdings
        .iter()
        .filter_map(|holding| {
            let listing = catalog.listing(&holding.listing_id)?;
            let yield_pct = metrics::yield_pct(listing.rent_yearly, listing.business_value);
            let row = HoldingRow {
                listing_id: listing.id.clone(),
                city: listing.city.clone(),
                country: listing.country.clone(),
                property_type: listing.property_type,
                invested: holding.invested,
                shares: holding.shares,
                yield_pct: round1(yield_pct),
                monthly_income: (holding.invested * yield_pct / 100.0 / 12.0).round(),
                progress_pct: metrics::progress_pct(listing.raise_collected, listing.raise_target),
            };
            Some((row, yield_pct))
        })
        .collect();

    let invested: f64 = positions.iter().map(|(h, _)| h.invested).sum();
    let weighted_yield_pct = if invested > 0.0 {
        round1(positions.iter().map(|(h, y)| h.invested * y).sum::<f64>() / invested)
    } else {
        0.0
    };
    let holdings: Vec<HoldingRow> = positions.into_iter().map(|(row, _)| row).collect();
    let totals = PortfolioTotals {
        objects: holdings.len(),
        invested,
        weighted_yield_pct,
        monthly_income: holdings.iter().map(|h| h.monthly_income).sum(),
    };

    let mut transactions = catalog.transactions.clone();
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
    transactions.truncate(RECENT_TRANSACTIONS);

    let mut notifications = catalog.notifications.clone();
    notifications.sort_by(|a, b| b.date.cmp(&a.date));

    InvestorDashboard {
        wallet,
        holdings,
        totals,
        transactions,
        unread: notifications.iter().filter(|n| !n.read).count(),
        notifications,
        docs: catalog.docs.clone(),
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerTotals {
    pub raise_target: f64,
    pub raise_collected: f64,
    /// Progress of the summed raise, not the mean of per-lot progress.
    pub progress_pct: f64,
    pub rent_monthly: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDashboard {
    pub owner: Owner,
    pub lots: Vec<LotRow>,
    pub totals: OwnerTotals,
    pub avg_yield_pct: f64,
    pub avg_risk_coefficient: f64,
    pub investors: u32,
}

/// Owner summary. `None` when the owner id is unknown.
pub fn owner_dashboard(catalog: &Catalog, owner_id: &str) -> Option<OwnerDashboard> {
    let owner = catalog.owner(owner_id)?.clone();
    let listings = catalog.listings_by_owner(owner_id);
    // Risk bands compare against the whole marketplace, as on the lots table.
    let risk = risk_stats(&catalog.listings);
    let lots: Vec<LotRow> = listings.iter().map(|l| lot_row(catalog, l, &risk)).collect();

    let raise_target: f64 = listings.iter().map(|l| l.raise_target).sum();
    let raise_collected: f64 = listings.iter().map(|l| l.raise_collected).sum();
    let count = lots.len() as f64;
    let average = |sum: f64| if lots.is_empty() { 0.0 } else { sum / count };

    Some(OwnerDashboard {
        totals: OwnerTotals {
            raise_target,
            raise_collected,
            progress_pct: metrics::progress_pct(raise_collected, raise_target),
            rent_monthly: listings.iter().map(|l| l.rent_monthly).sum(),
        },
        avg_yield_pct: round1(average(
            listings
                .iter()
                .map(|l| metrics::yield_pct(l.rent_yearly, l.business_value))
                .sum(),
        )),
        avg_risk_coefficient: average(lots.iter().map(|l| l.risk_coefficient).sum()),
        investors: listings
            .iter()
            .map(|l| generator::investor_count(generator::seed_from_id(&l.id)))
            .sum(),
        owner,
        lots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogParams;
    use crate::models::{Currency, Holding, LiquidityTier, Listing, TenantType};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn listing(id: &str, owner_id: &str, target: f64, collected: f64) -> Listing {
        Listing {
            id: id.to_string(),
            owner_id: owner_id.to_string(),
            property_type: PropertyType::Warehouse,
            country: "Portugal".to_string(),
            city: "Porto".to_string(),
            address: "Harbor Road, 8".to_string(),
            rent_monthly: 10_000.0,
            rent_yearly: 120_000.0,
            business_value: 1_200_000.0,
            min_ticket: 10_000.0,
            raise_target: target,
            raise_collected: collected,
            days_left: 5,
            tenant_type: TenantType::LocalBusiness,
            liquidity: LiquidityTier::Medium,
            sale_percent: 30.0,
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            owners: vec![
                Owner { id: "O-101".to_string(), name: "Meridian Assets".to_string(), rating: 7.2 },
                Owner { id: "O-102".to_string(), name: "Oakridge Ventures".to_string(), rating: 4.0 },
            ],
            listings: vec![
                listing("L-1", "O-101", 100_000.0, 40_000.0),
                listing("L-2", "O-101", 100_000.0, 120_000.0),
                listing("L-3", "O-102", 0.0, 0.0),
            ],
            holdings: vec![
                Holding { listing_id: "L-1".to_string(), invested: 12_000.0, shares: 10 },
                Holding { listing_id: "L-404".to_string(), invested: 1.0, shares: 1 },
            ],
            ..Catalog::empty(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap())
        }
    }

    #[test]
    fn investor_totals_follow_holdings() {
        let dashboard = investor_dashboard(&catalog(), Wallet::for_currency(Currency::Usd));
        assert_eq!(dashboard.holdings.len(), 1);
        let row = &dashboard.holdings[0];
        assert_eq!(row.yield_pct, 10.0);
        assert_eq!(row.monthly_income, 100.0);
        assert_eq!(row.progress_pct, 40.0);
        assert_eq!(dashboard.totals.invested, 12_000.0);
        assert_eq!(dashboard.totals.weighted_yield_pct, 10.0);
        assert_eq!(dashboard.wallet.currency, Currency::Usd);
    }

    #[test]
    fn weighted_yield_rounds_once() {
        let mut catalog = catalog();
        let mut listings = Vec::new();
        let mut holdings = Vec::new();
        for (id, rent_yearly) in [("L-11", 60_400.0), ("L-12", 60_400.0), ("L-13", 61_400.0)] {
            let mut l = listing(id, "O-101", 100_000.0, 0.0);
            l.rent_yearly = rent_yearly;
            l.business_value = 1_000_000.0;
            listings.push(l);
            holdings.push(Holding { listing_id: id.to_string(), invested: 10_000.0, shares: 10 });
        }
        catalog.listings = listings;
        catalog.holdings = holdings;

        let dashboard = investor_dashboard(&catalog, Wallet::for_currency(Currency::Rub));
        let rows: Vec<f64> = dashboard.holdings.iter().map(|h| h.yield_pct).collect();
        assert_eq!(rows, vec![6.0, 6.0, 6.1]);
        // 6.0733 from the raw yields; averaging the rounded rows would give 6.0.
        assert_eq!(dashboard.totals.weighted_yield_pct, 6.1);
    }

    #[test]
    fn owner_progress_uses_summed_raise() {
        let dashboard = owner_dashboard(&catalog(), "O-101").unwrap();
        assert_eq!(dashboard.lots.len(), 2);
        assert_eq!(dashboard.totals.raise_target, 200_000.0);
        assert_eq!(dashboard.totals.raise_collected, 160_000.0);
        assert_eq!(dashboard.totals.progress_pct, 80.0);
        assert_eq!(dashboard.lots[1].progress_pct, 100.0);
        assert_eq!(dashboard.avg_yield_pct, 10.0);
        assert!((dashboard.avg_risk_coefficient - 1.3).abs() < 1e-9);
    }

    #[test]
    fn owner_without_raise_target_reports_zero_progress() {
        let dashboard = owner_dashboard(&catalog(), "O-102").unwrap();
        assert_eq!(dashboard.totals.progress_pct, 0.0);
    }

    #[test]
    fn unknown_owner_has_no_dashboard() {
        assert!(owner_dashboard(&catalog(), "O-999").is_none());
    }

    #[test]
    fn generated_dashboard_lists_recent_activity_first() {
        let params = CatalogParams {
            owners: 8,
            max_listings_per_owner: 4,
            anchor: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        };
        let catalog = Catalog::generate(&mut StdRng::seed_from_u64(17), &params);
        let dashboard = investor_dashboard(&catalog, Wallet::for_currency(Currency::Rub));
        assert_eq!(dashboard.transactions.len(), RECENT_TRANSACTIONS);
        assert!(dashboard.transactions.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(dashboard.unread, catalog.notifications.iter().filter(|n| !n.read).count());
        assert_eq!(dashboard.holdings.len(), catalog.holdings.len());
    }
}
