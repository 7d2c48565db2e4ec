//! Supabase REST client.
//!
//! Thin wrapper around the project's PostgREST endpoint. Authentication is
//! a URL plus a service key sent as `apikey` and `Authorization` headers on
//! every request; queries are declarative filter chains rendered into URL
//! parameters by [`Query`](super::Query).

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use thiserror::Error;

use super::query::Query;

/// PostgREST error code returned when a single-row request matched no rows.
pub const ROW_NOT_FOUND_CODE: &str = "PGRST116";

/// Errors surfaced by the hosted database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store answered with an error object ({ message, code, ... }).
    #[error("{message}")]
    Api {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },

    /// The request never produced a store response.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The store answered with rows we could not decode.
    #[error("failed to decode store response: {0}")]
    Decode(String),

    /// A request payload could not be encoded as JSON.
    #[error("failed to encode request payload: {0}")]
    Encode(String),

    /// Bad URL or credentials at client construction time.
    #[error("store configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// True when a `.single()` lookup matched zero rows.
    pub fn is_row_not_found(&self) -> bool {
        matches!(self, StoreError::Api { code: Some(c), .. } if c == ROW_NOT_FOUND_CODE)
    }
}

/// Client for one Supabase project.
#[derive(Clone, Debug)]
pub struct Supabase {
    http: Client,
    rest_url: Url,
}

impl Supabase {
    /// Build a client for the project at `base_url`, authenticating every
    /// request with `key`.
    pub fn connect(base_url: &str, key: &str) -> Result<Self, StoreError> {
        let base = Url::parse(base_url)
            .map_err(|e| StoreError::Config(format!("invalid SUPABASE_URL: {}", e)))?;
        let rest_url = base
            .join("rest/v1/")
            .map_err(|e| StoreError::Config(format!("invalid SUPABASE_URL: {}", e)))?;

        let apikey = HeaderValue::from_str(key)
            .map_err(|_| StoreError::Config("SUPABASE_KEY contains invalid characters".into()))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", key))
            .map_err(|_| StoreError::Config("SUPABASE_KEY contains invalid characters".into()))?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", apikey);
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self { http, rest_url })
    }

    /// Start a query against `table`, mirroring the SDK's `from(...)` entry.
    pub fn from(&self, table: &str) -> Query<'_> {
        Query::new(self, table)
    }

    /// Call a stored procedure through `rest/v1/rpc/{function}`.
    pub async fn rpc(&self, function: &str, args: Value) -> Result<Value, StoreError> {
        let url = self
            .rest_url
            .join(&format!("rpc/{}", function))
            .map_err(|e| StoreError::Config(format!("invalid rpc function name: {}", e)))?;

        tracing::debug!(%function, "store rpc");
        let response = self.http.post(url).json(&args).send().await?;
        Self::into_json(response).await
    }

    /// Reachability probe used by the health endpoint.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let response = self.http.get(self.rest_url.clone()).send().await?;
        let status = response.status();
        if status.is_server_error() {
            return Err(StoreError::Api {
                status,
                code: None,
                message: "store unreachable".to_string(),
            });
        }
        Ok(())
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn table_url(&self, table: &str) -> Result<Url, StoreError> {
        self.rest_url
            .join(table)
            .map_err(|e| StoreError::Config(format!("invalid table name {:?}: {}", table, e)))
    }

    /// Translate a raw HTTP response into rows or a typed store error.
    pub(crate) async fn into_json(response: reqwest::Response) -> Result<Value, StoreError> {
        let status = response.status();
        if status.is_success() {
            if status == StatusCode::NO_CONTENT {
                return Ok(Value::Null);
            }
            return Ok(response.json().await?);
        }

        // PostgREST error bodies are { message, code, details, hint }.
        let body: Value = response.json().await.unwrap_or(Value::Null);
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("store request failed")
            .to_string();
        let code = body
            .get("code")
            .and_then(Value::as_str)
            .map(str::to_string);

        Err(StoreError::Api {
            status,
            code,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_builds_rest_url() {
        let store = Supabase::connect("https://project.supabase.co", "service-key").unwrap();
        let url = store.table_url("products").unwrap();
        assert_eq!(url.as_str(), "https://project.supabase.co/rest/v1/products");
    }

    #[test]
    fn connect_rejects_bad_url() {
        let err = Supabase::connect("not a url", "key").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn row_not_found_detection() {
        let err = StoreError::Api {
            status: StatusCode::NOT_ACCEPTABLE,
            code: Some(ROW_NOT_FOUND_CODE.to_string()),
            message: "no rows".to_string(),
        };
        assert!(err.is_row_not_found());

        let err = StoreError::Api {
            status: StatusCode::BAD_REQUEST,
            code: Some("22P02".to_string()),
            message: "invalid input syntax".to_string(),
        };
        assert!(!err.is_row_not_found());
    }
}
