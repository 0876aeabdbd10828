use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of property a listing advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    NewBuilding,
}

impl PropertyType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::NewBuilding => "newbuilding",
        }
    }

    /// Parse the wire name, case-insensitively. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "apartment" => Some(PropertyType::Apartment),
            "house" => Some(PropertyType::House),
            "newbuilding" => Some(PropertyType::NewBuilding),
            _ => None,
        }
    }

    /// All accepted wire names
    pub const fn all_values() -> &'static [&'static str] {
        &["apartment", "house", "newbuilding"]
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid property type: '{}'", s))
    }
}

/// Core listing data model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub title: String,
    pub address: String,
    pub district: String,
    pub property_type: PropertyType,
    /// Asking price in whole kronor
    pub price: i64,
    pub rooms: u32,
    /// Living area in square meters
    pub area: f64,
    pub floor: u32,
    pub total_floors: u32,
    pub listed_at: DateTime<Utc>,
}

/// Owner-submitted listing before it enters the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub address: String,
    pub district: String,
    pub property_type: PropertyType,
    pub price: i64,
    pub rooms: u32,
    pub area: f64,
    pub floor: u32,
    pub total_floors: u32,
}
