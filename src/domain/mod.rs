pub mod listing;
pub mod patch;
pub mod query;
pub mod workflow;

pub use patch::ListingPatch;
