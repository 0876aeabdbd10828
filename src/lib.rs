pub mod catalog;
pub mod format;
pub mod models;
pub mod mortgage;
pub mod search;

pub use catalog::{Catalog, SubmissionError, DISTRICTS};
pub use models::{Listing, ListingDraft, PropertyType};
pub use mortgage::{MortgageError, MortgageQuote, MortgageTerms};
pub use search::{filter_listings, CriteriaForm, SearchCriteria};
