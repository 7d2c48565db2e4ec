//! HTTP request handlers.

pub mod categories;
pub mod products;
pub mod reviews;
pub mod search;
pub mod users;
pub mod values;

pub use categories::category_routes;
pub use products::product_routes;
pub use reviews::review_routes;
pub use search::search_routes;
pub use users::user_routes;
pub use values::value_routes;
