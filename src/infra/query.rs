//! Declarative query builder for the Supabase REST interface.
//!
//! Filter chains behave like the hosted SDK: `store.from("products")
//! .select("*").eq("category_id", 3).limit(10)` renders to
//! `?select=*&category_id=eq.3&limit=10`. The rendered pairs are the whole
//! contract: the store receives exactly the filters that were requested.

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::supabase::{StoreError, Supabase};

/// Media type asking PostgREST for exactly one object instead of an array.
const SINGLE_OBJECT_ACCEPT: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Select,
    Insert,
    Update,
    Delete,
}

/// One pending query against a single table.
#[must_use = "queries do nothing until executed"]
pub struct Query<'a> {
    store: &'a Supabase,
    table: String,
    verb: Verb,
    params: Vec<(String, String)>,
    body: Option<Value>,
    single: bool,
    encode_error: Option<String>,
}

impl<'a> Query<'a> {
    pub(crate) fn new(store: &'a Supabase, table: &str) -> Self {
        Self {
            store,
            table: table.to_string(),
            verb: Verb::Select,
            params: Vec::new(),
            body: None,
            single: false,
            encode_error: None,
        }
    }

    /// Read the given columns (`"*"` for all).
    pub fn select(mut self, columns: &str) -> Self {
        self.verb = Verb::Select;
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    /// Insert one row or a batch of rows.
    pub fn insert(mut self, rows: impl Serialize) -> Self {
        self.verb = Verb::Insert;
        self.set_body(rows);
        self
    }

    /// Update the rows matched by the chained filters.
    pub fn update(mut self, patch: impl Serialize) -> Self {
        self.verb = Verb::Update;
        self.set_body(patch);
        self
    }

    /// Delete the rows matched by the chained filters.
    pub fn delete(mut self) -> Self {
        self.verb = Verb::Delete;
        self
    }

    /// `column = value`
    pub fn eq(self, column: &str, value: impl ToString) -> Self {
        self.filter(column, "eq", value.to_string())
    }

    /// `column >= value`
    pub fn gte(self, column: &str, value: impl ToString) -> Self {
        self.filter(column, "gte", value.to_string())
    }

    /// `column <= value`
    pub fn lte(self, column: &str, value: impl ToString) -> Self {
        self.filter(column, "lte", value.to_string())
    }

    /// Case-insensitive pattern match. `%` wildcards are accepted and
    /// rewritten to the `*` form PostgREST expects in URLs.
    pub fn ilike(self, column: &str, pattern: &str) -> Self {
        self.filter(column, "ilike", pattern.replace('%', "*"))
    }

    /// Sort the result by `column`.
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.params
            .push(("order".to_string(), format!("{}.{}", column, direction)));
        self
    }

    /// Cap the number of returned rows.
    pub fn limit(mut self, count: u64) -> Self {
        self.params.push(("limit".to_string(), count.to_string()));
        self
    }

    /// Skip the first `count` rows.
    pub fn offset(mut self, count: u64) -> Self {
        self.params.push(("offset".to_string(), count.to_string()));
        self
    }

    /// Expect exactly one row; zero rows surfaces as a row-not-found error.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// The rendered query string pairs, in the order they were chained.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.params
    }

    fn filter(mut self, column: &str, op: &str, value: String) -> Self {
        self.params
            .push((column.to_string(), format!("{}.{}", op, value)));
        self
    }

    fn set_body(&mut self, body: impl Serialize) {
        match serde_json::to_value(body) {
            Ok(value) => self.body = Some(value),
            Err(e) => self.encode_error = Some(e.to_string()),
        }
    }

    /// Run the query, returning raw row-shaped JSON.
    pub async fn execute(self) -> Result<Value, StoreError> {
        if let Some(message) = self.encode_error {
            return Err(StoreError::Encode(message));
        }

        let url = self.store.table_url(&self.table)?;
        let http = self.store.http();

        let mut request = match self.verb {
            Verb::Select => http.get(url),
            Verb::Insert => http.post(url),
            Verb::Update => http.patch(url),
            Verb::Delete => http.delete(url),
        };

        request = request.query(&self.params);

        if self.single {
            request = request.header(ACCEPT, SINGLE_OBJECT_ACCEPT);
        }
        if matches!(self.verb, Verb::Insert | Verb::Update) {
            request = request.header("Prefer", "return=representation");
        }
        if let Some(body) = &self.body {
            request = request.json(body);
        }

        tracing::debug!(table = %self.table, verb = ?self.verb, "store query");
        let response = request.send().await?;
        Supabase::into_json(response).await
    }

    /// Run the query and decode the rows into `T`.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, StoreError> {
        let value = self.execute().await?;
        serde_json::from_value(value).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Supabase {
        Supabase::connect("http://localhost:54321", "test-key").unwrap()
    }

    fn pairs(query: &Query<'_>) -> Vec<(String, String)> {
        query.query_pairs().to_vec()
    }

    #[test]
    fn select_with_equality_filter() {
        let store = store();
        let query = store.from("products").select("*").eq("category_id", 3);
        assert_eq!(
            pairs(&query),
            vec![
                ("select".to_string(), "*".to_string()),
                ("category_id".to_string(), "eq.3".to_string()),
            ]
        );
    }

    #[test]
    fn range_filters_render_gte_and_lte() {
        let store = store();
        let query = store
            .from("products")
            .select("*")
            .gte("price", 10.5)
            .lte("price", 99.0);
        assert_eq!(
            pairs(&query),
            vec![
                ("select".to_string(), "*".to_string()),
                ("price".to_string(), "gte.10.5".to_string()),
                ("price".to_string(), "lte.99".to_string()),
            ]
        );
    }

    #[test]
    fn ilike_rewrites_percent_wildcards() {
        let store = store();
        let query = store.from("components").select("*").ilike("name", "%gpu%");
        assert_eq!(
            pairs(&query),
            vec![
                ("select".to_string(), "*".to_string()),
                ("name".to_string(), "ilike.*gpu*".to_string()),
            ]
        );
    }

    #[test]
    fn ordering_and_pagination_render_in_chain_order() {
        let store = store();
        let query = store
            .from("products")
            .select("*")
            .order("price", false)
            .limit(20)
            .offset(40);
        assert_eq!(
            pairs(&query),
            vec![
                ("select".to_string(), "*".to_string()),
                ("order".to_string(), "price.desc".to_string()),
                ("limit".to_string(), "20".to_string()),
                ("offset".to_string(), "40".to_string()),
            ]
        );
    }

    #[test]
    fn mutations_keep_their_filters() {
        let store = store();
        let query = store
            .from("reviews")
            .update(serde_json::json!({ "likes": 4 }))
            .eq("id", 12);
        assert_eq!(
            pairs(&query),
            vec![("id".to_string(), "eq.12".to_string())]
        );
        assert_eq!(query.verb, Verb::Update);
        assert_eq!(query.body, Some(serde_json::json!({ "likes": 4 })));
    }

    #[test]
    fn delete_by_filter_has_no_body() {
        let store = store();
        let query = store.from("features_values").delete().eq("id_product", 7);
        assert_eq!(query.verb, Verb::Delete);
        assert!(query.body.is_none());
        assert_eq!(
            pairs(&query),
            vec![("id_product".to_string(), "eq.7".to_string())]
        );
    }

    #[test]
    fn single_sets_flag_without_touching_params() {
        let store = store();
        let query = store.from("profiles").select("*").eq("id", "abc").single();
        assert!(query.single);
        assert_eq!(query.params.len(), 2);
    }
}
