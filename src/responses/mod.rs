pub mod asset;
pub mod errors;
pub mod html;
pub mod redirect;
pub mod xlsx;

pub use asset::asset_response;
pub use errors::{error_to_response, ResultResp};

// Normal HTML response
pub use html::html_response;
pub use redirect::see_other;
pub use xlsx::xlsx_response;
