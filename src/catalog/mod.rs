pub mod seed;

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::models::{Listing, ListingDraft};
use crate::search::{filter_listings, SearchCriteria};

/// Districts the catalog covers, in the order the site lists them
pub const DISTRICTS: [&str; 5] = [
    "Södermalm",
    "Östermalm",
    "Kungsholmen",
    "Vasastan",
    "Bromma",
];

/// Rejected listing submission
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmissionError {
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl SubmissionError {
    fn invalid(field: &'static str, reason: &str) -> Self {
        Self::InvalidField {
            field,
            reason: reason.to_string(),
        }
    }
}

/// In-memory listing catalog.
///
/// Holds the stock listings plus anything submitted during the run; nothing
/// is persisted, so a restart starts over from the stock set.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Catalog preloaded with the agency's stock listings
    pub fn seeded() -> Self {
        let listings = seed::stock_listings();
        debug!("Seeded catalog with {} listings", listings.len());
        Self { listings }
    }

    /// Catalog with no listings at all
    pub fn empty() -> Self {
        Self {
            listings: Vec::new(),
        }
    }

    /// Every listing, in insertion order
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Run the search criteria over the catalog, keeping insertion order.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Listing> {
        filter_listings(&self.listings, criteria)
    }

    /// Validate a draft and append it as a new listing.
    ///
    /// The new listing gets an id one above the current highest and the
    /// acceptance time as its listing date.
    pub fn submit(&mut self, draft: ListingDraft) -> Result<Listing, SubmissionError> {
        validate_draft(&draft)?;

        let id = self.listings.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let listing = Listing {
            id,
            title: draft.title,
            address: draft.address,
            district: draft.district,
            property_type: draft.property_type,
            price: draft.price,
            rooms: draft.rooms,
            area: draft.area,
            floor: draft.floor,
            total_floors: draft.total_floors,
            listed_at: Utc::now(),
        };

        debug!("Accepted '{}' as listing {}", listing.title, listing.id);
        self.listings.push(listing.clone());
        Ok(listing)
    }
}

fn validate_draft(draft: &ListingDraft) -> Result<(), SubmissionError> {
    non_blank("title", &draft.title)?;
    non_blank("address", &draft.address)?;
    non_blank("district", &draft.district)?;

    if draft.price <= 0 {
        return Err(SubmissionError::invalid("price", "must be a positive amount"));
    }
    if draft.rooms == 0 {
        return Err(SubmissionError::invalid("rooms", "must be at least 1"));
    }
    if !(draft.area > 0.0) {
        return Err(SubmissionError::invalid(
            "area",
            "must be a positive number of square meters",
        ));
    }
    if draft.floor == 0 {
        return Err(SubmissionError::invalid("floor", "must be at least 1"));
    }
    if draft.total_floors == 0 {
        return Err(SubmissionError::invalid("total_floors", "must be at least 1"));
    }

    Ok(())
}

fn non_blank(field: &'static str, value: &str) -> Result<(), SubmissionError> {
    if value.trim().is_empty() {
        return Err(SubmissionError::invalid(
            field,
            "cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}
