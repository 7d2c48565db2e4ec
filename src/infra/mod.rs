//! Infrastructure layer - External systems integration
//!
//! The only external system is the hosted Supabase database, reached
//! through its REST interface (PostgREST). This module provides the
//! HTTP client and the declarative query builder services use.

pub mod query;
pub mod supabase;

pub use query::Query;
pub use supabase::{StoreError, Supabase, ROW_NOT_FOUND_CODE};
