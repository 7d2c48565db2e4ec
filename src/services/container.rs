//! Service container - builds every service from one shared store client.

use std::sync::Arc;

use crate::infra::Supabase;

use super::{
    CategoryManager, CategoryService, ProductManager, ProductService, ProfileManager,
    ReviewManager, ReviewService, SearchManager, SearchService, UserService, ValueManager,
    ValueService,
};

/// Central registry of all services.
pub struct Services {
    categories: Arc<dyn CategoryService>,
    products: Arc<dyn ProductService>,
    values: Arc<dyn ValueService>,
    reviews: Arc<dyn ReviewService>,
    users: Arc<dyn UserService>,
    search: Arc<dyn SearchService>,
}

impl Services {
    /// Wire every service to the given store client.
    pub fn from_store(store: Arc<Supabase>) -> Self {
        Self {
            categories: Arc::new(CategoryManager::new(store.clone())),
            products: Arc::new(ProductManager::new(store.clone())),
            values: Arc::new(ValueManager::new(store.clone())),
            reviews: Arc::new(ReviewManager::new(store.clone())),
            users: Arc::new(ProfileManager::new(store.clone())),
            search: Arc::new(SearchManager::new(store)),
        }
    }

    pub fn categories(&self) -> Arc<dyn CategoryService> {
        self.categories.clone()
    }

    pub fn products(&self) -> Arc<dyn ProductService> {
        self.products.clone()
    }

    pub fn values(&self) -> Arc<dyn ValueService> {
        self.values.clone()
    }

    pub fn reviews(&self) -> Arc<dyn ReviewService> {
        self.reviews.clone()
    }

    pub fn users(&self) -> Arc<dyn UserService> {
        self.users.clone()
    }

    pub fn search(&self) -> Arc<dyn SearchService> {
        self.search.clone()
    }
}
