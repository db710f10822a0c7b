pub mod bundled;
pub mod catalog_api;
pub mod exchange_rate_api;
pub mod util;
