//! HTTP client for the Valantis catalog RPC endpoint.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::{
    auth::current_token,
    query::FilterQuery,
    types::{ApiResponse, Product, ProductId},
    Error,
};

const DEFAULT_API_URL: &str = "http://api.valantis.store:40000/";
const DEFAULT_PASSWORD: &str = "Valantis";

/// Request envelope shared by every action.
#[derive(Serialize)]
struct Envelope<'a> {
    action: &'a str,
    params: Value,
}

/// HTTP client for the Valantis catalog service.
///
/// All actions go through a single POST endpoint with an `{action, params}`
/// envelope and a daily `X-Auth` token. Each request builds a fresh
/// `reqwest::Client` with a 30-second timeout, and the token is recomputed
/// per request so a call sequence straddling midnight stays valid.
pub struct Client {
    /// Endpoint URL. Defaults to `http://api.valantis.store:40000/`.
    base_url: String,
    /// Shared secret the daily token is derived from.
    password: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production catalog endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }

    /// Creates a new client with a custom endpoint URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }

    /// Creates a client from `VALANTIS_API_URL` / `VALANTIS_API_PASSWORD`,
    /// falling back to the production defaults for unset variables.
    pub fn from_env() -> Self {
        Self {
            base_url: env_or("VALANTIS_API_URL", DEFAULT_API_URL),
            password: env_or("VALANTIS_API_PASSWORD", DEFAULT_PASSWORD),
        }
    }

    async fn call<T>(&self, action: &str, params: Value) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = Url::parse(&self.base_url).map_err(|e| {
            tracing::error!("Invalid endpoint URL: {}", e);
            Error::RequestFailed
        })?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .post(url)
            .header("content-type", "application/json")
            .header("x-auth", current_token(&self.password))
            .json(&Envelope { action, params })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("{} request failed: {}", action, e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("{} failed with status {}: {}", action, status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<ApiResponse<T>>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse {} response: {} | body: {}", action, e, snippet);
            Error::RequestFailed
        })?;

        parsed.result.ok_or_else(|| {
            tracing::error!("{} response carried no `result` field", action);
            Error::MissingResult
        })
    }

    /// Fetches the ids of every product in the catalog.
    pub async fn get_ids(&self) -> Result<Vec<ProductId>, Error> {
        self.call("get_ids", Value::Object(serde_json::Map::new()))
            .await
    }

    /// Fetches the ids of products matching the given filter criteria.
    pub async fn filter(&self, query: &FilterQuery) -> Result<Vec<ProductId>, Error> {
        self.call("filter", query.to_params()).await
    }

    /// Resolves a set of ids to full product records.
    ///
    /// The id list is not paginated by the service, so callers pass it
    /// through whole. The service may return duplicate records for an id.
    pub async fn get_items(&self, ids: &[ProductId]) -> Result<Vec<Product>, Error> {
        self.call("get_items", serde_json::json!({ "ids": ids })).await
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
