use estate_desk::{
    filter_listings, Catalog, CriteriaForm, ListingDraft, MortgageTerms, PropertyType,
    SearchCriteria, DISTRICTS,
};

#[test]
fn seeded_catalog_covers_every_filter_dimension() {
    let catalog = Catalog::seeded();
    assert!(!catalog.is_empty());

    for district in DISTRICTS {
        let hits = catalog.search(&SearchCriteria::default().with_district(district));
        assert!(!hits.is_empty(), "no listings in {district}");
    }

    for kind in [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::NewBuilding,
    ] {
        let hits = catalog.search(&SearchCriteria::default().with_property_type(kind));
        assert!(!hits.is_empty(), "no listings of type {kind}");
    }
}

#[test]
fn raw_form_json_drives_the_search() {
    let json = r#"{
        "priceTo": 8000000,
        "rooms": "2",
        "type": "apartment",
        "district": "all"
    }"#;
    let form: CriteriaForm = serde_json::from_str(json).unwrap();

    let criteria = form.criteria();
    assert_eq!(
        criteria,
        SearchCriteria::default()
            .with_max_price(8_000_000)
            .with_rooms(2)
            .with_property_type(PropertyType::Apartment)
    );

    let catalog = Catalog::seeded();
    let hits = catalog.search(&criteria);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|l| {
        l.price <= 8_000_000 && l.rooms == 2 && l.property_type == PropertyType::Apartment
    }));
}

#[test]
fn search_keeps_catalog_order_and_is_stable_on_repeat() {
    let catalog = Catalog::seeded();
    let criteria = SearchCriteria::default().with_property_type(PropertyType::Apartment);

    let hits = catalog.search(&criteria);
    let ids: Vec<u32> = hits.iter().map(|l| l.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted, "results must keep catalog order");

    let again = filter_listings(&hits, &criteria);
    assert_eq!(hits, again);
}

#[test]
fn submitted_listing_is_searchable_but_not_persisted() {
    let mut catalog = Catalog::seeded();

    let accepted = catalog
        .submit(ListingDraft {
            title: "Vindsvåning med ateljé".to_string(),
            address: "Högbergsgatan 30".to_string(),
            district: "Södermalm".to_string(),
            property_type: PropertyType::Apartment,
            price: 8_900_000,
            rooms: 3,
            area: 88.0,
            floor: 6,
            total_floors: 6,
        })
        .unwrap();

    let hits = catalog.search(&SearchCriteria::default().with_district("Södermalm"));
    assert_eq!(hits.last().map(|l| l.id), Some(accepted.id));

    // a fresh catalog starts over from the stock set
    let fresh = Catalog::seeded();
    assert!(fresh.listings().iter().all(|l| l.id != accepted.id));
}

#[test]
fn quote_for_a_catalog_listing_reconciles() {
    let catalog = Catalog::seeded();
    let listing = &catalog.listings()[0];

    let terms = MortgageTerms {
        price: listing.price,
        down_payment: listing.price / 5,
        years: 25,
        annual_rate: 4.3,
    };

    let quote = terms.quote().unwrap();
    assert_eq!(quote.loan_amount, listing.price - listing.price / 5);
    assert_eq!(quote.months, 300);
    assert!(quote.monthly_payment > 0);
    assert!((quote.total_payment - quote.overpayment - quote.loan_amount).abs() <= 1);
}

#[test]
fn listing_serialization_round_trips() {
    let catalog = Catalog::seeded();
    let json = serde_json::to_string_pretty(catalog.listings()).unwrap();

    let back: Vec<estate_desk::Listing> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, catalog.listings());
}
