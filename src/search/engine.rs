use crate::models::Listing;
use crate::search::SearchCriteria;

impl SearchCriteria {
    /// Check a single listing against every active constraint.
    ///
    /// Constraints combine with AND and evaluation stops at the first miss.
    /// Price and area bounds are inclusive; rooms, property type and district
    /// must match exactly.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.min_price.map_or(true, |min| listing.price >= min)
            && self.max_price.map_or(true, |max| listing.price <= max)
            && self.rooms.map_or(true, |rooms| listing.rooms == rooms)
            && self.min_area.map_or(true, |min| listing.area >= min)
            && self.max_area.map_or(true, |max| listing.area <= max)
            && self
                .property_type
                .map_or(true, |kind| listing.property_type == kind)
            && self
                .district
                .as_deref()
                .map_or(true, |district| listing.district == district)
    }
}

/// Run the criteria over a set of listings, keeping the input order.
///
/// The result is recomputed from scratch on every call; nothing is cached
/// between criteria changes.
pub fn filter_listings(listings: &[Listing], criteria: &SearchCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;
    use chrono::Utc;

    fn listing(
        id: u32,
        price: i64,
        rooms: u32,
        area: f64,
        property_type: PropertyType,
        district: &str,
    ) -> Listing {
        Listing {
            id,
            title: format!("Listing {id}"),
            address: format!("Testgatan {id}"),
            district: district.to_string(),
            property_type,
            price,
            rooms,
            area,
            floor: 2,
            total_floors: 5,
            listed_at: Utc::now(),
        }
    }

    fn sample_listings() -> Vec<Listing> {
        vec![
            listing(1, 4_500_000, 2, 55.0, PropertyType::Apartment, "Södermalm"),
            listing(2, 7_900_000, 3, 82.5, PropertyType::Apartment, "Vasastan"),
            listing(3, 11_200_000, 5, 140.0, PropertyType::House, "Bromma"),
            listing(4, 6_300_000, 2, 61.0, PropertyType::NewBuilding, "Kungsholmen"),
        ]
    }

    #[test]
    fn empty_criteria_match_every_listing() {
        let listings = sample_listings();
        let criteria = SearchCriteria::default();
        assert!(listings.iter().all(|l| criteria.matches(l)));
        assert_eq!(filter_listings(&listings, &criteria), listings);
    }

    #[test]
    fn price_and_area_bounds_are_inclusive() {
        let subject = listing(1, 4_500_000, 2, 55.0, PropertyType::Apartment, "Södermalm");

        let at_bounds = SearchCriteria::default()
            .with_min_price(4_500_000)
            .with_max_price(4_500_000)
            .with_min_area(55.0)
            .with_max_area(55.0);
        assert!(at_bounds.matches(&subject));

        assert!(!SearchCriteria::default()
            .with_min_price(4_500_001)
            .matches(&subject));
        assert!(!SearchCriteria::default()
            .with_max_price(4_499_999)
            .matches(&subject));
        assert!(!SearchCriteria::default().with_min_area(55.5).matches(&subject));
        assert!(!SearchCriteria::default().with_max_area(54.5).matches(&subject));
    }

    #[test]
    fn rooms_type_and_district_match_exactly() {
        let subject = listing(4, 6_300_000, 2, 61.0, PropertyType::NewBuilding, "Kungsholmen");

        assert!(SearchCriteria::default().with_rooms(2).matches(&subject));
        assert!(!SearchCriteria::default().with_rooms(3).matches(&subject));

        assert!(SearchCriteria::default()
            .with_property_type(PropertyType::NewBuilding)
            .matches(&subject));
        assert!(!SearchCriteria::default()
            .with_property_type(PropertyType::House)
            .matches(&subject));

        assert!(SearchCriteria::default()
            .with_district("Kungsholmen")
            .matches(&subject));
        assert!(!SearchCriteria::default()
            .with_district("Östermalm")
            .matches(&subject));
    }

    #[test]
    fn constraints_combine_with_and() {
        let subject = listing(2, 7_900_000, 3, 82.5, PropertyType::Apartment, "Vasastan");

        let all_pass = SearchCriteria::default()
            .with_max_price(8_000_000)
            .with_rooms(3)
            .with_district("Vasastan");
        assert!(all_pass.matches(&subject));

        let one_fails = all_pass.with_max_price(7_000_000);
        assert!(!one_fails.matches(&subject));
    }

    #[test]
    fn adding_a_constraint_never_grows_the_result() {
        let listings = sample_listings();
        let loose = SearchCriteria::default().with_max_price(10_000_000);
        let tight = loose.clone().with_rooms(2);

        let loose_hits = filter_listings(&listings, &loose);
        let tight_hits = filter_listings(&listings, &tight);

        assert!(tight_hits.len() <= loose_hits.len());
        assert!(tight_hits.iter().all(|l| loose_hits.contains(l)));
    }

    #[test]
    fn results_keep_input_order() {
        let listings = sample_listings();
        let criteria = SearchCriteria::default().with_rooms(2);

        let hits = filter_listings(&listings, &criteria);
        let ids: Vec<u32> = hits.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn filtering_twice_with_the_same_criteria_is_a_no_op() {
        let listings = sample_listings();
        let criteria = SearchCriteria::default()
            .with_min_price(5_000_000)
            .with_max_area(100.0);

        let once = filter_listings(&listings, &criteria);
        let twice = filter_listings(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn duplicate_listings_are_kept_as_is() {
        let twin = listing(7, 5_000_000, 2, 60.0, PropertyType::Apartment, "Norrmalm");
        let listings = vec![twin.clone(), twin.clone()];

        let hits = filter_listings(&listings, &SearchCriteria::default().with_rooms(2));
        assert_eq!(hits.len(), 2);
    }
}
