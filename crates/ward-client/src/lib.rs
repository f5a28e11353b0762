//! # ward-client: Typed client for the ward backend
//!
//! Provides typed access to the three collections the ward works with:
//! - **Doctors**: listed by name, used to default an order's doctor
//! - **Patients**: the roster, with the attending doctor embedded
//! - **Orders**: per-patient care orders and their completed-task sets
//!
//! ## Architecture
//!
//! The backend is a hosted Postgres exposed through PostgREST. Every table
//! lives at `{base_url}/rest/v1/{table}`; reads are expressed with
//! [`query::TableQuery`]. Each request carries the anonymous key both as
//! the `apikey` header and as a bearer token.
//!
//! Requests are sent exactly once. There is no retry, batching or
//! cross-table transaction; callers re-read after every write.

pub mod config;
pub mod doctors;
pub mod error;
pub mod orders;
pub mod patients;
pub mod query;
pub(crate) mod rest;

pub use config::WardApiConfig;
pub use error::WardApiError;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

/// Top-level ward API client. Holds one sub-client per collection.
#[derive(Debug, Clone)]
pub struct WardClient {
    doctors: doctors::DoctorClient,
    patients: patients::PatientClient,
    orders: orders::OrderClient,
}

impl WardClient {
    /// Create a new client from configuration.
    pub fn new(config: WardApiConfig) -> Result<Self, WardApiError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(config.anon_key.as_str())
            .map_err(|_| WardApiError::Config(config::ConfigError::InvalidKey))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key.as_str()))
            .map_err(|_| WardApiError::Config(config::ConfigError::InvalidKey))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| WardApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        let rest = rest::Rest::new(http, config.base_url);
        Ok(Self {
            doctors: doctors::DoctorClient::new(rest.clone()),
            patients: patients::PatientClient::new(rest.clone()),
            orders: orders::OrderClient::new(rest),
        })
    }

    /// Access the `doctors` client.
    pub fn doctors(&self) -> &doctors::DoctorClient {
        &self.doctors
    }

    /// Access the `patients` client.
    pub fn patients(&self) -> &patients::PatientClient {
        &self.patients
    }

    /// Access the `orders` client.
    pub fn orders(&self) -> &orders::OrderClient {
        &self.orders
    }
}
