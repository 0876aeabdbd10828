pub mod criteria;
pub mod engine;

pub use criteria::{CriteriaForm, SearchCriteria};
pub use engine::filter_listings;
