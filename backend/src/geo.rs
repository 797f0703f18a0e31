use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    Europe,
    Asia,
    MiddleEast,
    Americas,
}

struct CountryEntry {
    name: &'static str,
    region: Region,
    cities: &'static [&'static str],
}

const COUNTRIES: &[CountryEntry] = &[
    CountryEntry { name: "Germany", region: Region::Europe, cities: &["Berlin", "Munich", "Hamburg"] },
    CountryEntry { name: "Spain", region: Region::Europe, cities: &["Madrid", "Barcelona", "Valencia"] },
    CountryEntry { name: "Portugal", region: Region::Europe, cities: &["Lisbon", "Porto"] },
    CountryEntry { name: "Cyprus", region: Region::Europe, cities: &["Limassol", "Larnaca"] },
    CountryEntry { name: "Thailand", region: Region::Asia, cities: &["Bangkok", "Phuket"] },
    CountryEntry { name: "Indonesia", region: Region::Asia, cities: &["Bali", "Jakarta"] },
    CountryEntry { name: "Georgia", region: Region::Asia, cities: &["Tbilisi", "Batumi"] },
    CountryEntry { name: "UAE", region: Region::MiddleEast, cities: &["Dubai", "Abu Dhabi"] },
    CountryEntry { name: "Turkey", region: Region::MiddleEast, cities: &["Istanbul", "Antalya"] },
    CountryEntry { name: "Oman", region: Region::MiddleEast, cities: &["Muscat"] },
    CountryEntry { name: "USA", region: Region::Americas, cities: &["Miami", "Austin", "New York"] },
    CountryEntry { name: "Mexico", region: Region::Americas, cities: &["Cancun", "Mexico City"] },
];

impl Region {
    pub const ALL: [Region; 4] = [Region::Europe, Region::Asia, Region::MiddleEast, Region::Americas];

    pub fn label(self) -> &'static str {
        match self {
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::MiddleEast => "Middle East",
            Region::Americas => "Americas",
        }
    }

    pub fn countries(self) -> Vec<&'static str> {
        COUNTRIES
            .iter()
            .filter(|c| c.region == self)
            .map(|c| c.name)
            .collect()
    }

    pub fn contains(self, country: &str) -> bool {
        region_of(country) == Some(self)
    }
}

/// Case-insensitive lookup of the region a country belongs to.
pub fn region_of(country: &str) -> Option<Region> {
    COUNTRIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(country))
        .map(|c| c.region)
}

pub fn cities_of(country: &str) -> &'static [&'static str] {
    COUNTRIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(country))
        .map(|c| c.cities)
        .unwrap_or(&[])
}

pub fn all_countries() -> impl Iterator<Item = &'static str> {
    COUNTRIES.iter().map(|c| c.name)
}
