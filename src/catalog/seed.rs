use chrono::Utc;

use crate::models::{Listing, PropertyType};

/// The agency's stock listings, loaded at startup.
pub fn stock_listings() -> Vec<Listing> {
    let listed_at = Utc::now();

    vec![
        Listing {
            id: 1,
            title: "Ljus tvåa vid Nytorget".to_string(),
            address: "Skånegatan 63".to_string(),
            district: "Södermalm".to_string(),
            property_type: PropertyType::Apartment,
            price: 5_195_000,
            rooms: 2,
            area: 58.0,
            floor: 3,
            total_floors: 5,
            listed_at,
        },
        Listing {
            id: 2,
            title: "Gavellägenhet med balkong".to_string(),
            address: "Karlbergsvägen 48".to_string(),
            district: "Vasastan".to_string(),
            property_type: PropertyType::Apartment,
            price: 7_450_000,
            rooms: 3,
            area: 81.5,
            floor: 4,
            total_floors: 6,
            listed_at,
        },
        Listing {
            id: 3,
            title: "Nyproducerad etta i Hornsbergs strand".to_string(),
            address: "Moa Martinsons gata 9".to_string(),
            district: "Kungsholmen".to_string(),
            property_type: PropertyType::NewBuilding,
            price: 3_995_000,
            rooms: 1,
            area: 34.0,
            floor: 2,
            total_floors: 8,
            listed_at,
        },
        Listing {
            id: 4,
            title: "Sekelskiftesvåning vid Karlaplan".to_string(),
            address: "Valhallavägen 112".to_string(),
            district: "Östermalm".to_string(),
            property_type: PropertyType::Apartment,
            price: 12_950_000,
            rooms: 4,
            area: 114.0,
            floor: 5,
            total_floors: 6,
            listed_at,
        },
        Listing {
            id: 5,
            title: "Funkisvilla med trädgård".to_string(),
            address: "Nyängsvägen 21".to_string(),
            district: "Bromma".to_string(),
            property_type: PropertyType::House,
            price: 11_200_000,
            rooms: 5,
            area: 142.0,
            floor: 1,
            total_floors: 2,
            listed_at,
        },
        Listing {
            id: 6,
            title: "Kompakt etta nära Odenplan".to_string(),
            address: "Norrbackagatan 17".to_string(),
            district: "Vasastan".to_string(),
            property_type: PropertyType::Apartment,
            price: 2_450_000,
            rooms: 1,
            area: 21.0,
            floor: 6,
            total_floors: 10,
            listed_at,
        },
        Listing {
            id: 7,
            title: "Nybyggd fyra med takterrass".to_string(),
            address: "Bobergsgatan 42".to_string(),
            district: "Östermalm".to_string(),
            property_type: PropertyType::NewBuilding,
            price: 9_800_000,
            rooms: 4,
            area: 96.5,
            floor: 7,
            total_floors: 12,
            listed_at,
        },
        Listing {
            id: 8,
            title: "Radhus nära Mälaren".to_string(),
            address: "Tackjärnsvägen 8".to_string(),
            district: "Bromma".to_string(),
            property_type: PropertyType::House,
            price: 8_650_000,
            rooms: 4,
            area: 118.0,
            floor: 1,
            total_floors: 2,
            listed_at,
        },
    ]
}
