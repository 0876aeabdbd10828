use serde::{Deserialize, Serialize};

use crate::models::PropertyType;

/// Search constraints for the catalog. `None` means the dimension is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Lowest acceptable price in kronor, inclusive
    pub min_price: Option<i64>,
    /// Highest acceptable price in kronor, inclusive
    pub max_price: Option<i64>,
    /// Exact room count
    pub rooms: Option<u32>,
    /// Smallest acceptable living area in square meters, inclusive
    pub min_area: Option<f64>,
    /// Largest acceptable living area in square meters, inclusive
    pub max_area: Option<f64>,
    /// Property type the listing must have
    pub property_type: Option<PropertyType>,
    /// District the listing must be in
    pub district: Option<String>,
}

impl SearchCriteria {
    pub fn with_min_price(mut self, kronor: i64) -> Self {
        self.min_price = Some(kronor);
        self
    }

    pub fn with_max_price(mut self, kronor: i64) -> Self {
        self.max_price = Some(kronor);
        self
    }

    pub fn with_rooms(mut self, rooms: u32) -> Self {
        self.rooms = Some(rooms);
        self
    }

    pub fn with_min_area(mut self, sqm: f64) -> Self {
        self.min_area = Some(sqm);
        self
    }

    pub fn with_max_area(mut self, sqm: f64) -> Self {
        self.max_area = Some(sqm);
        self
    }

    pub fn with_property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }

    /// True when no dimension carries a constraint
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// Filter state exactly as the site's controls hand it over.
///
/// Numeric fields use `0` for "unbounded" and the selects use `"all"` for
/// "no preference". [`CriteriaForm::criteria`] resolves those sentinels into
/// a [`SearchCriteria`]; anything unparseable degrades to no constraint
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CriteriaForm {
    pub price_from: i64,
    pub price_to: i64,
    /// Room count as the select sends it: a number or "all"
    pub rooms: String,
    pub area_from: f64,
    pub area_to: f64,
    /// Property type name or "all"
    #[serde(rename = "type")]
    pub property_type: String,
    /// District name or "all"
    pub district: String,
}

impl Default for CriteriaForm {
    fn default() -> Self {
        Self {
            price_from: 0,
            price_to: 0,
            rooms: "all".to_string(),
            area_from: 0.0,
            area_to: 0.0,
            property_type: "all".to_string(),
            district: "all".to_string(),
        }
    }
}

impl CriteriaForm {
    /// Resolve the form's sentinel values into explicit criteria.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            min_price: price_bound(self.price_from),
            max_price: price_bound(self.price_to),
            rooms: self.rooms.trim().parse().ok(),
            min_area: area_bound(self.area_from),
            max_area: area_bound(self.area_to),
            property_type: PropertyType::parse(&self.property_type),
            district: district_choice(&self.district),
        }
    }
}

fn price_bound(kronor: i64) -> Option<i64> {
    (kronor > 0).then_some(kronor)
}

fn area_bound(sqm: f64) -> Option<f64> {
    (sqm.is_finite() && sqm > 0.0).then_some(sqm)
}

fn district_choice(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}
