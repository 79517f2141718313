pub mod error;
pub mod home;
pub mod manage_listings;

pub use error::error_page;
pub use home::home_page;
pub use manage_listings::{manage_listings_page, ManageListingsVm};
