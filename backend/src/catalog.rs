use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::geo::{self, Region};
use crate::models::{
    DocItem, DocKind, Holding, LiquidityTier, Listing, NewsItem, NotificationItem, OrderSide, Owner,
    P2pOrder, PropertyType, TenantType, Transaction, TransactionKind, TransactionStatus,
};

/// Fractional units each listing is split into; NAV per share is value / units.
pub const SHARES_PER_LISTING: f64 = 1000.0;

const OWNER_NAMES: &[&str] = &[
    "Northwind Holdings", "Atlas Property Group", "Blue Harbor Estates", "Crescent Capital",
    "Greenline Realty", "Meridian Assets", "Silverstone Partners", "Oakridge Ventures",
    "Summit Retail Fund", "Lighthouse Investments", "Granite Bay Realty", "Horizon Commercial",
];

const STREETS: &[&str] = &[
    "Market Street", "Harbor Road", "Central Avenue", "Station Square", "Park Lane",
    "Riverside Drive", "Old Town Passage", "Commerce Boulevard",
];

const MIN_TICKETS: &[f64] = &[1_000.0, 5_000.0, 10_000.0, 25_000.0];
const TENANTS: &[TenantType] = &[
    TenantType::FederalChain,
    TenantType::LocalBusiness,
    TenantType::Government,
    TenantType::Individual,
];
const LIQUIDITY: &[LiquidityTier] = &[LiquidityTier::High, LiquidityTier::Medium, LiquidityTier::Low];

const PLATFORM_NEWS: &[(&str, &str, &str, &str)] = &[
    ("secondary-market-launch", "platform", "Secondary market opens for all investors", "Shares of funded lots can now be resold to other investors through the P2P order book."),
    ("q3-payout-report", "payouts", "Third-quarter payouts summary", "Rental income for the quarter has been distributed across all funded lots."),
    ("new-region-middle-east", "regions", "Lots in the Middle East now available", "Retail and hospitality properties in Dubai and Muscat join the marketplace."),
    ("owner-verification", "platform", "Stricter owner verification", "Every property owner now passes an extended document check before listing."),
    ("currency-preferences", "product", "Dashboards in your preferred currency", "Balances can be displayed in rubles, dollars or euros."),
    ("warehouse-demand", "market", "Warehouse demand stays high", "Logistics tenants keep signing long leases, supporting warehouse yields."),
    ("min-ticket-lowered", "product", "Minimum ticket lowered on selected lots", "Several lots now accept investments starting from 1,000."),
    ("tax-documents-ready", "payouts", "Annual tax documents are ready", "Income statements for the past year can be downloaded from the dashboard."),
];

const NOTIFICATIONS: &[(&str, &str)] = &[
    ("Payout received", "Monthly rental income was credited to your balance."),
    ("Lot fully funded", "A lot you invested in reached its fundraising target."),
    ("New document available", "A quarterly report was added to your documents."),
    ("Order matched", "Your P2P order was matched with a counterparty."),
    ("Fundraising ends soon", "A lot on your watchlist closes in less than a week."),
];

#[derive(Debug, Clone)]
pub struct CatalogParams {
    pub owners: usize,
    pub max_listings_per_owner: usize,
    /// Date every generated timestamp is measured back from.
    pub anchor: NaiveDate,
}

/// In-memory demo data set. Immutable once generated.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub owners: Vec<Owner>,
    pub listings: Vec<Listing>,
    pub news: Vec<NewsItem>,
    pub transactions: Vec<Transaction>,
    pub notifications: Vec<NotificationItem>,
    pub docs: Vec<DocItem>,
    pub holdings: Vec<Holding>,
    pub orders: Vec<P2pOrder>,
    /// Date the generated history and feeds are measured back from.
    pub anchor: NaiveDate,
}

fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

fn round_to(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

fn days_before(anchor: NaiveDate, days: i64) -> NaiveDate {
    anchor - Duration::days(days)
}

impl Catalog {
    /// Catalog with no data, anchored at `anchor`.
    pub fn empty(anchor: NaiveDate) -> Self {
        Self {
            owners: Vec::new(),
            listings: Vec::new(),
            news: Vec::new(),
            transactions: Vec::new(),
            notifications: Vec::new(),
            docs: Vec::new(),
            holdings: Vec::new(),
            orders: Vec::new(),
            anchor,
        }
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R, params: &CatalogParams) -> Self {
        let owners = generate_owners(rng, params.owners);
        let listings = generate_listings(rng, &owners, params.max_listings_per_owner.max(1));
        let holdings = generate_holdings(rng, &listings);
        let transactions = generate_transactions(rng, &listings, &holdings, params.anchor);
        let docs = generate_docs(&holdings, params.anchor);
        let orders = generate_orders(rng, &listings);

        let news = PLATFORM_NEWS
            .iter()
            .map(|(slug, category, title, summary)| NewsItem {
                slug: slug.to_string(),
                title: title.to_string(),
                summary: summary.to_string(),
                category: category.to_string(),
                published: days_before(params.anchor, rng.gen_range(0..120)),
            })
            .collect();

        let notifications = (0..6)
            .map(|i| {
                let (title, body) = pick(rng, NOTIFICATIONS);
                NotificationItem {
                    id: format!("N-{}", i + 1),
                    title: title.to_string(),
                    body: body.to_string(),
                    date: days_before(params.anchor, rng.gen_range(0..30)),
                    read: rng.gen_bool(0.5),
                }
            })
            .collect();

        Self {
            owners,
            listings,
            news,
            transactions,
            notifications,
            docs,
            holdings,
            orders,
            anchor: params.anchor,
        }
    }

    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn owner(&self, id: &str) -> Option<&Owner> {
        self.owners.iter().find(|o| o.id == id)
    }

    /// Owner shown on the owner dashboard of the demo session.
    pub fn demo_owner(&self) -> Option<&Owner> {
        self.owners.first()
    }

    pub fn listings_by_owner(&self, owner_id: &str) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.owner_id == owner_id).collect()
    }

    pub fn listings_in_region(&self, region: Region) -> Vec<&Listing> {
        self.listings.iter().filter(|l| region.contains(&l.country)).collect()
    }

    pub fn listings_in_country(&self, country: &str) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| l.country.eq_ignore_ascii_case(country))
            .collect()
    }

    pub fn news_article(&self, slug: &str) -> Option<&NewsItem> {
        self.news.iter().find(|n| n.slug == slug)
    }

    pub fn owner_name(&self, owner_id: &str) -> &str {
        self.owner(owner_id).map(|o| o.name.as_str()).unwrap_or("")
    }
}

fn generate_owners<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Owner> {
    (0..count)
        .map(|i| {
            let base = OWNER_NAMES[i % OWNER_NAMES.len()];
            let name = if i < OWNER_NAMES.len() {
                base.to_string()
            } else {
                format!("{base} {}", i / OWNER_NAMES.len() + 1)
            };
            Owner {
                id: format!("O-{}", 101 + i),
                name,
                rating: rng.gen_range(0..=100) as f64 / 10.0,
            }
        })
        .collect()
}

fn generate_listings<R: Rng + ?Sized>(rng: &mut R, owners: &[Owner], max_per_owner: usize) -> Vec<Listing> {
    let countries: Vec<&str> = geo::all_countries().collect();
    let mut next_id = 1001;
    let mut listings = Vec::new();

    for owner in owners {
        for _ in 0..rng.gen_range(1..=max_per_owner) {
            let country = *pick(rng, &countries);
            let cities = geo::cities_of(country);
            let city = *pick(rng, cities);

            let rent_monthly = rng.gen_range(20..=400) as f64 * 500.0;
            let rent_yearly = rent_monthly * 12.0;
            let target_yield = rng.gen_range(50..=140) as f64 / 1000.0;
            let business_value = round_to(rent_yearly / target_yield, 10_000.0);
            let raise_target = round_to(business_value * rng.gen_range(10..=40) as f64 / 100.0, 1_000.0);
            // Up to 115% of target on purpose: overfunded lots exist in the demo.
            let raise_collected = (raise_target * rng.gen_range(0..=115) as f64 / 100.0).round();

            listings.push(Listing {
                id: format!("L-{next_id}"),
                owner_id: owner.id.clone(),
                property_type: *pick(rng, &PropertyType::ALL),
                country: country.to_string(),
                city: city.to_string(),
                address: format!("{}, {}", pick(rng, STREETS), rng.gen_range(1..200)),
                rent_monthly,
                rent_yearly,
                business_value,
                min_ticket: *pick(rng, MIN_TICKETS),
                raise_target,
                raise_collected,
                days_left: rng.gen_range(0..=90),
                tenant_type: *pick(rng, TENANTS),
                liquidity: *pick(rng, LIQUIDITY),
                sale_percent: rng.gen_range(0..=60) as f64,
            });
            next_id += 1;
        }
    }
    listings
}

fn generate_holdings<R: Rng + ?Sized>(rng: &mut R, listings: &[Listing]) -> Vec<Holding> {
    let count = listings.len().min(5);
    listings
        .choose_multiple(rng, count)
        .map(|listing| {
            let invested = listing.min_ticket * rng.gen_range(1..=10) as f64;
            let nav = listing.business_value / SHARES_PER_LISTING;
            let shares = if nav > 0.0 { (invested / nav).floor().max(1.0) as u32 } else { 1 };
            Holding { listing_id: listing.id.clone(), invested, shares }
        })
        .collect()
}

fn generate_transactions<R: Rng + ?Sized>(
    rng: &mut R,
    listings: &[Listing],
    holdings: &[Holding],
    anchor: NaiveDate,
) -> Vec<Transaction> {
    const KINDS: &[TransactionKind] = &[
        TransactionKind::Deposit,
        TransactionKind::Investment,
        TransactionKind::Payout,
        TransactionKind::Withdrawal,
        TransactionKind::P2pBuy,
        TransactionKind::P2pSell,
    ];

    (0..12)
        .map(|i| {
            let kind = *pick(rng, KINDS);
            let listing_id = match kind {
                TransactionKind::Deposit | TransactionKind::Withdrawal => None,
                TransactionKind::Investment | TransactionKind::Payout if !holdings.is_empty() => {
                    Some(pick(rng, holdings).listing_id.clone())
                }
                _ if !listings.is_empty() => Some(pick(rng, listings).id.clone()),
                _ => None,
            };
            let amount = match kind {
                TransactionKind::Payout => rng.gen_range(50..=2_000) as f64 * 10.0,
                _ => rng.gen_range(1..=50) as f64 * 1_000.0,
            };
            Transaction {
                id: format!("T-{}", 5001 + i),
                kind,
                listing_id,
                amount,
                date: days_before(anchor, rng.gen_range(0..180)),
                status: if rng.gen_ratio(1, 6) { TransactionStatus::Pending } else { TransactionStatus::Completed },
            }
        })
        .collect()
}

fn generate_docs(holdings: &[Holding], anchor: NaiveDate) -> Vec<DocItem> {
    let mut docs = Vec::new();
    for (i, holding) in holdings.iter().enumerate() {
        let offset = i as i64 * 9;
        docs.push(DocItem {
            id: format!("D-{}", docs.len() + 1),
            title: format!("Investment agreement {}", holding.listing_id),
            kind: DocKind::Contract,
            date: days_before(anchor, 60 + offset),
            listing_id: Some(holding.listing_id.clone()),
        });
        docs.push(DocItem {
            id: format!("D-{}", docs.len() + 1),
            title: format!("Quarterly report {}", holding.listing_id),
            kind: DocKind::Report,
            date: days_before(anchor, 5 + offset),
            listing_id: Some(holding.listing_id.clone()),
        });
    }
    if !holdings.is_empty() {
        docs.push(DocItem {
            id: format!("D-{}", docs.len() + 1),
            title: "Qualified investor certificate".to_string(),
            kind: DocKind::Certificate,
            date: days_before(anchor, 200),
            listing_id: None,
        });
    }
    docs
}

fn generate_orders<R: Rng + ?Sized>(rng: &mut R, listings: &[Listing]) -> Vec<P2pOrder> {
    if listings.is_empty() {
        return Vec::new();
    }
    let count = (listings.len() / 2).max(1) * 3;
    (0..count)
        .map(|i| {
            let listing = pick(rng, listings);
            let nav_per_share = listing.business_value / SHARES_PER_LISTING;
            let price = nav_per_share * rng.gen_range(85..=115) as f64 / 100.0;
            P2pOrder {
                id: format!("P-{}", 7001 + i),
                listing_id: listing.id.clone(),
                side: if rng.gen_bool(0.7) { OrderSide::Sell } else { OrderSide::Buy },
                shares: rng.gen_range(1..=50),
                price_per_share: (price * 100.0).round() / 100.0,
                nav_per_share,
                trader: format!("Investor #{}", rng.gen_range(100..1000)),
            }
        })
        .collect()
}
