//! Product service and search filter composition.
//!
//! The search endpoints combine name/category/price-range filters with
//! pagination and price ordering; [`ProductFilter::apply`] is the single
//! place where that combination is rendered onto a store query.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::PRODUCTS_BY_CATEGORY_LIMIT;
use crate::domain::{NewProduct, Product, ProductPatch};
use crate::errors::AppResult;
use crate::infra::{Query, Supabase};
use crate::types::PaginationParams;

const TABLE: &str = "products";

/// Sort direction for price ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Composable product search filter. Every populated field becomes
/// exactly one query parameter; empty fields add nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Lower price bound (inclusive)
    pub min_price: Option<f64>,
    /// Upper price bound (inclusive)
    pub max_price: Option<f64>,
    /// Case-insensitive substring match on the product name
    pub name: Option<String>,
    /// Exact category match
    pub category_id: Option<i64>,
    /// Price ordering
    pub order: Option<SortOrder>,
    /// Page window
    pub pages: Option<PaginationParams>,
}

impl ProductFilter {
    /// Render the filter onto a store query.
    pub fn apply<'a>(&self, mut query: Query<'a>) -> Query<'a> {
        if let Some(min) = self.min_price {
            query = query.gte("price", min);
        }
        if let Some(max) = self.max_price {
            query = query.lte("price", max);
        }
        if let Some(name) = &self.name {
            query = query.ilike("name", &format!("%{}%", name));
        }
        if let Some(category_id) = self.category_id {
            query = query.eq("category_id", category_id);
        }
        if let Some(order) = self.order {
            query = query.order("price", order == SortOrder::Asc);
        }
        if let Some(pages) = &self.pages {
            query = query.limit(pages.limit()).offset(pages.offset());
        }
        query
    }
}

/// Product use cases.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// All products, optionally windowed
    async fn list(
        &self,
        pages: Option<PaginationParams>,
        order: Option<SortOrder>,
    ) -> AppResult<Vec<Product>>;

    /// Single product by id (404 when missing)
    async fn get(&self, id: i64) -> AppResult<Product>;

    /// Products currently flagged as offers
    async fn offers(&self) -> AppResult<Vec<Product>>;

    /// First batch of products in a category
    async fn by_category(&self, category_id: i64) -> AppResult<Vec<Product>>;

    /// Search with the composed filter
    async fn search(&self, filter: ProductFilter) -> AppResult<Vec<Product>>;

    /// Insert one product
    async fn create(&self, product: NewProduct) -> AppResult<()>;

    /// Insert a batch of products
    async fn create_many(&self, products: Vec<NewProduct>) -> AppResult<()>;

    /// Update the product with the given id
    async fn update(&self, id: i64, patch: ProductPatch) -> AppResult<()>;

    /// Delete the product with the given id
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation backed by the hosted store.
pub struct ProductManager {
    store: Arc<Supabase>,
}

impl ProductManager {
    pub fn new(store: Arc<Supabase>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn list(
        &self,
        pages: Option<PaginationParams>,
        order: Option<SortOrder>,
    ) -> AppResult<Vec<Product>> {
        let mut query = self.store.from(TABLE).select("*");
        if let Some(order) = order {
            query = query.order("price", order == SortOrder::Asc);
        }
        if let Some(pages) = pages {
            query = query.limit(pages.limit()).offset(pages.offset());
        }
        Ok(query.fetch().await?)
    }

    async fn get(&self, id: i64) -> AppResult<Product> {
        Ok(self
            .store
            .from(TABLE)
            .select("*")
            .eq("id", id)
            .single()
            .fetch()
            .await?)
    }

    async fn offers(&self) -> AppResult<Vec<Product>> {
        Ok(self
            .store
            .from(TABLE)
            .select("*")
            .eq("isOffer", true)
            .fetch()
            .await?)
    }

    async fn by_category(&self, category_id: i64) -> AppResult<Vec<Product>> {
        Ok(self
            .store
            .from(TABLE)
            .select("*")
            .eq("category_id", category_id)
            .limit(PRODUCTS_BY_CATEGORY_LIMIT)
            .fetch()
            .await?)
    }

    async fn search(&self, filter: ProductFilter) -> AppResult<Vec<Product>> {
        let query = filter.apply(self.store.from(TABLE).select("*"));
        Ok(query.fetch().await?)
    }

    async fn create(&self, product: NewProduct) -> AppResult<()> {
        self.store.from(TABLE).insert([product]).execute().await?;
        Ok(())
    }

    async fn create_many(&self, products: Vec<NewProduct>) -> AppResult<()> {
        self.store.from(TABLE).insert(products).execute().await?;
        Ok(())
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> AppResult<()> {
        self.store
            .from(TABLE)
            .update(patch)
            .eq("id", id)
            .execute()
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.store
            .from(TABLE)
            .delete()
            .eq("id", id)
            .execute()
            .await?;
        Ok(())
    }
}
