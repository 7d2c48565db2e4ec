//! Catalog API - REST backend for an e-commerce catalog
//!
//! The catalog data lives in a hosted Supabase project; this crate exposes
//! it over HTTP with Axum, talking to the store through its PostgREST
//! interface.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Catalog row types and write payloads
//! - **services**: Application use cases and business logic
//! - **infra**: Hosted store client and query builder
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Print the OpenAPI document
//! cargo run -- openapi
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infra::Supabase;
