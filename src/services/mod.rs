//! Service layer - one trait + implementation per catalog entity.
//!
//! Every method is a single declarative query (or a short fixed sequence
//! of queries) against the hosted store; there is no business logic
//! beyond building the filter chain the request asked for.

mod categories;
mod container;
mod products;
mod reviews;
mod search;
mod users;
mod values;

pub use categories::{CategoryManager, CategoryService};
pub use container::Services;
pub use products::{ProductFilter, ProductManager, ProductService, SortOrder};
pub use reviews::{ReviewManager, ReviewService};
pub use search::{SearchManager, SearchService};
pub use users::{LikeStatus, ProfileManager, UserService};
pub use values::{ValueManager, ValueService};

#[cfg(any(test, feature = "test-utils"))]
pub use categories::MockCategoryService;
#[cfg(any(test, feature = "test-utils"))]
pub use products::MockProductService;
#[cfg(any(test, feature = "test-utils"))]
pub use reviews::MockReviewService;
#[cfg(any(test, feature = "test-utils"))]
pub use search::MockSearchService;
#[cfg(any(test, feature = "test-utils"))]
pub use users::MockUserService;
#[cfg(any(test, feature = "test-utils"))]
pub use values::MockValueService;
