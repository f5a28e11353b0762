//! Shared request plumbing for the table sub-clients.
//!
//! Every call follows the same shape: build `{base}/rest/v1/{table}?...`,
//! send once (no retry), map transport failures, non-2xx statuses and
//! decode failures onto [`WardApiError`] variants tagged with the endpoint.

use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::WardApiError;
use crate::query::TableQuery;

/// REST path prefix under the project base URL.
const REST_PREFIX: &str = "rest/v1";

/// Asks the backend to echo written rows back in the response body.
const RETURN_REPRESENTATION: &str = "return=representation";

#[derive(Debug, Clone)]
pub(crate) struct Rest {
    http: reqwest::Client,
    base_url: Url,
}

impl Rest {
    pub(crate) fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    fn url(&self, endpoint: &str, query: &TableQuery) -> Result<Url, WardApiError> {
        let raw = format!(
            "{}/{REST_PREFIX}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            query.table()
        );
        let mut url = Url::parse(&raw).map_err(|e| WardApiError::InvalidUrl {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        query.apply(&mut url);
        Ok(url)
    }

    /// `GET` the rows matching `query`.
    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        query: &TableQuery,
    ) -> Result<Vec<T>, WardApiError> {
        let endpoint = format!("GET /{}", query.table());
        let url = self.url(&endpoint, query)?;
        tracing::debug!(%url, "{endpoint}");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| WardApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;
        decode(endpoint, resp).await
    }

    /// `POST` one row and return its stored representation.
    pub(crate) async fn insert<B: Serialize, T: DeserializeOwned>(
        &self,
        query: &TableQuery,
        row: &B,
    ) -> Result<T, WardApiError> {
        let endpoint = format!("POST /{}", query.table());
        let url = self.url(&endpoint, query)?;
        tracing::debug!(%url, "{endpoint}");

        let resp = self
            .http
            .post(url)
            .header("Prefer", HeaderValue::from_static(RETURN_REPRESENTATION))
            .json(&[row])
            .send()
            .await
            .map_err(|e| WardApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;
        let rows: Vec<T> = decode(endpoint.clone(), resp).await?;
        rows.into_iter()
            .next()
            .ok_or(WardApiError::MissingRepresentation { endpoint })
    }

    /// `PATCH` the rows matching `query`'s filters and return the first
    /// updated row. An empty result means nothing matched.
    pub(crate) async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        query: &TableQuery,
        patch: &B,
    ) -> Result<T, WardApiError> {
        let endpoint = format!("PATCH /{}", query.table());
        let url = self.url(&endpoint, query)?;
        tracing::debug!(%url, "{endpoint}");

        let resp = self
            .http
            .patch(url)
            .header("Prefer", HeaderValue::from_static(RETURN_REPRESENTATION))
            .json(patch)
            .send()
            .await
            .map_err(|e| WardApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;
        let rows: Vec<T> = decode(endpoint.clone(), resp).await?;
        rows.into_iter()
            .next()
            .ok_or(WardApiError::NotFound { endpoint })
    }
}

async fn decode<T: DeserializeOwned>(
    endpoint: String,
    resp: reqwest::Response,
) -> Result<T, WardApiError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(WardApiError::ApiError {
            endpoint,
            status,
            body,
        });
    }

    resp.json().await.map_err(|e| WardApiError::Deserialization {
        endpoint,
        source: e,
    })
}
