use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    Retail,
    Office,
    Warehouse,
    Hospitality,
    FoodService,
    Residential,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Retail,
        PropertyType::Office,
        PropertyType::Warehouse,
        PropertyType::Hospitality,
        PropertyType::FoodService,
        PropertyType::Residential,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Retail => "Retail",
            PropertyType::Office => "Office",
            PropertyType::Warehouse => "Warehouse",
            PropertyType::Hospitality => "Hospitality",
            PropertyType::FoodService => "Food service",
            PropertyType::Residential => "Residential",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TenantType {
    FederalChain,
    LocalBusiness,
    Government,
    Individual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LiquidityTier {
    High,
    Medium,
    Low,
}

/// A fractional investment lot on the marketplace.
///
/// `raise_collected` may exceed `raise_target`; nothing enforces the bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub owner_id: String,
    pub property_type: PropertyType,
    pub country: String,
    pub city: String,
    pub address: String,
    pub rent_monthly: f64,
    pub rent_yearly: f64,
    pub business_value: f64,
    pub min_ticket: f64,
    pub raise_target: f64,
    pub raise_collected: f64,
    pub days_left: u32,
    pub tenant_type: TenantType,
    pub liquidity: LiquidityTier,
    pub sale_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldYearData {
    pub year: i32,
    pub yield_pct: f64,
    pub income: u64,
    pub investors_in: u32,
    pub investors_out: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub published: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    RentPayment,
    DividendPayout,
    ValuationUpdate,
    TenantRenewal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub kind: EventKind,
    pub title: String,
    pub amount: u64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionKind {
    Deposit,
    Investment,
    Payout,
    Withdrawal,
    P2pBuy,
    P2pSell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub listing_id: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: NaiveDate,
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocKind {
    Contract,
    Report,
    Certificate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocItem {
    pub id: String,
    pub title: String,
    pub kind: DocKind,
    pub date: NaiveDate,
    pub listing_id: Option<String>,
}

/// The demo investor's position in one listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub listing_id: String,
    pub invested: f64,
    pub shares: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderSide {
    Sell,
    Buy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct P2pOrder {
    pub id: String,
    pub listing_id: String,
    pub side: OrderSide,
    pub shares: u32,
    pub price_per_share: f64,
    pub nav_per_share: f64,
    pub trader: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Investor,
    Owner,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Investor => "investor",
            Role::Owner => "owner",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "investor" => Some(Role::Investor),
            "owner" => Some(Role::Owner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Currency {
    #[default]
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Rub => "rub",
            Currency::Usd => "usd",
            Currency::Eur => "eur",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "rub" => Some(Currency::Rub),
            "usd" => Some(Currency::Usd),
            "eur" => Some(Currency::Eur),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_and_currency_keys_parse_back() {
        for role in [Role::Investor, Role::Owner] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        for currency in [Currency::Rub, Currency::Usd, Currency::Eur] {
            assert_eq!(Currency::parse(currency.as_str()), Some(currency));
        }
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Currency::parse("USD"), None);
    }

    #[test]
    fn listing_serializes_camel_case() {
        let listing = Listing {
            id: "L-1".to_string(),
            owner_id: "O-1".to_string(),
            property_type: PropertyType::FoodService,
            country: "Spain".to_string(),
            city: "Madrid".to_string(),
            address: "Calle Mayor 1".to_string(),
            rent_monthly: 1000.0,
            rent_yearly: 12000.0,
            business_value: 200000.0,
            min_ticket: 1000.0,
            raise_target: 50000.0,
            raise_collected: 10000.0,
            days_left: 12,
            tenant_type: TenantType::LocalBusiness,
            liquidity: LiquidityTier::Medium,
            sale_percent: 20.0,
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["ownerId"], "O-1");
        assert_eq!(json["propertyType"], "foodService");
        assert_eq!(json["raiseCollected"], 10000.0);
    }
}
