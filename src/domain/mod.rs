//! Domain layer - Row types for the catalog entities.
//!
//! These mirror the tables of the hosted database; the store owns the
//! schema and all lifecycle, so the types here are plain serde shapes
//! plus the insert/patch payloads the write endpoints accept.

mod category;
mod feature;
mod product;
mod profile;
mod review;

pub use category::{Category, CategoryPatch, NewCategory};
pub use feature::{Feature, FeatureValue, FeatureValuePatch, NewFeatureValue};
pub use product::{CityStock, NewProduct, Product, ProductPatch};
pub use profile::{NewProfile, Profile};
pub use review::{NewReview, Review};
