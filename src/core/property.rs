//! Property records listed by the faceted listing

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operational status of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Active,
    Inactive,
    Maintenance,
}

impl PropertyStatus {
    /// Every status, in the order the listing offers them
    pub const ALL: [PropertyStatus; 3] = [
        PropertyStatus::Active,
        PropertyStatus::Inactive,
        PropertyStatus::Maintenance,
    ];

    /// Tag used on the wire and in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Active => "active",
            PropertyStatus::Inactive => "inactive",
            PropertyStatus::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of building a property is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Villa,
    Building,
    Apartment,
}

impl PropertyType {
    /// Every type, in the order the listing offers them
    pub const ALL: [PropertyType; 4] = [
        PropertyType::House,
        PropertyType::Villa,
        PropertyType::Building,
        PropertyType::Apartment,
    ];

    /// Tag used on the wire and in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Villa => "villa",
            PropertyType::Building => "building",
            PropertyType::Apartment => "apartment",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filterable, sortable property record
///
/// Records are handed to the listing engine as immutable input; the engine
/// only selects, orders and slices them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub status: PropertyStatus,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub price: u64,
    /// 0.0 to 5.0
    pub rating: f64,
    pub last_updated: NaiveDate,
}

impl Property {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        status: PropertyStatus,
        kind: PropertyType,
        price: u64,
        rating: f64,
        last_updated: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            status,
            kind,
            price,
            rating,
            last_updated,
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The ten-record demo data set
#[rustfmt::skip]
pub fn mock_properties() -> Vec<Property> {
    use PropertyStatus::*;
    use PropertyType::*;

    vec![
        Property::new(1, "Sunset Villa", Active, Villa, 850_000, 4.5, date(2024, 1, 15), "Beautiful villa with ocean view"),
        Property::new(2, "Downtown Apartment", Inactive, Apartment, 320_000, 3.8, date(2024, 1, 10), "Modern apartment in city center"),
        Property::new(3, "Garden House", Active, House, 650_000, 4.2, date(2024, 1, 20), "Spacious house with garden"),
        Property::new(4, "City Building", Maintenance, Building, 1_200_000, 4.0, date(2024, 1, 8), "Commercial building downtown"),
        Property::new(5, "Beach Villa", Active, Villa, 950_000, 4.8, date(2024, 1, 22), "Luxury villa on the beach"),
        Property::new(6, "Modern House", Inactive, House, 480_000, 3.9, date(2024, 1, 12), "Contemporary house design"),
        Property::new(7, "Luxury Apartment", Active, Apartment, 420_000, 4.3, date(2024, 1, 18), "High-end apartment with amenities"),
        Property::new(8, "Office Building", Maintenance, Building, 2_100_000, 4.1, date(2024, 1, 25), "Multi-story office complex"),
        Property::new(9, "Cozy Cottage", Active, House, 280_000, 4.0, date(2024, 1, 14), "Charming cottage in quiet area"),
        Property::new(10, "Sky Apartment", Active, Apartment, 580_000, 4.6, date(2024, 1, 28), "Penthouse with city views"),
    ]
}
