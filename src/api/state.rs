//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Supabase;
use crate::services::{
    CategoryService, ProductService, ReviewService, SearchService, Services, UserService,
    ValueService,
};

/// Application state containing all services and the store client.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryService>,
    pub products: Arc<dyn ProductService>,
    pub values: Arc<dyn ValueService>,
    pub reviews: Arc<dyn ReviewService>,
    pub users: Arc<dyn UserService>,
    pub search: Arc<dyn SearchService>,
    /// Store client, kept for the health probe
    pub store: Arc<Supabase>,
}

impl AppState {
    /// Create application state from configuration.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let store = Arc::new(Supabase::connect(
            &config.supabase_url,
            config.supabase_key(),
        )?);
        Ok(Self::from_store(store))
    }

    /// Create application state from an existing store client.
    pub fn from_store(store: Arc<Supabase>) -> Self {
        let services = Services::from_store(store.clone());
        Self {
            categories: services.categories(),
            products: services.products(),
            values: services.values(),
            reviews: services.reviews(),
            users: services.users(),
            search: services.search(),
            store,
        }
    }

    /// Create application state with manually injected services.
    ///
    /// Used by tests to swap in mock services.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        categories: Arc<dyn CategoryService>,
        products: Arc<dyn ProductService>,
        values: Arc<dyn ValueService>,
        reviews: Arc<dyn ReviewService>,
        users: Arc<dyn UserService>,
        search: Arc<dyn SearchService>,
        store: Arc<Supabase>,
    ) -> Self {
        Self {
            categories,
            products,
            values,
            reviews,
            users,
            search,
            store,
        }
    }
}
