//! Remote people loader
//!
//! `PeopleSource` is the seam between the controller and wherever people
//! come from. The production source is a plain `GET` against a JSON
//! collection endpoint.

mod error;

pub use error::{FetchError, FETCH_FAILED_MESSAGE};

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::core::Person;

/// Anything that can produce the people collection
#[async_trait]
pub trait PeopleSource: Send + Sync {
    /// Fetch the full collection
    async fn fetch_people(&self) -> Result<Vec<Person>, FetchError>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// Wire shape of one record. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawPerson {
    id: i64,
    name: String,
    email: String,
}

impl From<RawPerson> for Person {
    fn from(raw: RawPerson) -> Self {
        Person {
            id: raw.id,
            name: raw.name,
            email: raw.email,
        }
    }
}

/// Decode a response body into people
pub fn decode_people(body: &[u8]) -> Result<Vec<Person>, FetchError> {
    let raw: Vec<RawPerson> =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(raw.into_iter().map(Person::from).collect())
}

/// Fetches people over HTTP
pub struct HttpPeopleSource {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpPeopleSource {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PeopleSource for HttpPeopleSource {
    async fn fetch_people(&self) -> Result<Vec<Person>, FetchError> {
        tracing::debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(self.endpoint.clone())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(FetchError::from_network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::from_http_status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(FetchError::from_network_error)?;
        decode_people(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}
