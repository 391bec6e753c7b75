//! Profile sources - where a card gets its Person Record from.
//!
//! Two implementations exist: [`RandomUserClient`] calls the public API
//! directly, [`ProxyClient`] goes through the `usercard-proxy` service.
//! Both make exactly one request per call, with no retry and no timeout.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::{DEFAULT_PROXY_URL, RANDOM_USER_API_URL};
use crate::error::{FetchError, FetchResult};
use crate::types::{Person, RandomUserResponse};

/// Anything that can produce one Person Record per call.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_person(&self) -> FetchResult<Person>;

    /// Human readable name for logs
    fn label(&self) -> &str;
}

/// Optional filter forwarded as `?gender=`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GenderFilter {
    Male,
    Female,
}

impl GenderFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenderFilter::Male => "male",
            GenderFilter::Female => "female",
        }
    }

    /// Lenient parse: anything other than the two known values means "no filter".
    pub fn parse_lenient(value: Option<&str>) -> Option<Self> {
        value.and_then(|v| v.parse().ok())
    }
}

impl FromStr for GenderFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(GenderFilter::Male),
            "female" => Ok(GenderFilter::Female),
            other => Err(format!("unknown gender filter: {}", other)),
        }
    }
}

impl fmt::Display for GenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direct client for the random-user API.
#[derive(Clone, Debug)]
pub struct RandomUserClient {
    client: Client,
    endpoint: String,
    gender: Option<GenderFilter>,
}

impl RandomUserClient {
    /// Client for the public endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(RANDOM_USER_API_URL)
    }

    /// Client for a custom endpoint (tests, mirrors).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            gender: None,
        }
    }

    pub fn gender(mut self, gender: Option<GenderFilter>) -> Self {
        self.gender = gender;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the raw JSON of the first result.
    ///
    /// Used by the proxy, which forwards the record without re-shaping it.
    pub async fn fetch_raw(&self) -> FetchResult<serde_json::Value> {
        let mut envelope: serde_json::Value = self.get_json().await?;
        match envelope.get_mut("results").and_then(|r| r.as_array_mut()) {
            Some(results) if !results.is_empty() => Ok(results.swap_remove(0)),
            Some(_) => Err(FetchError::EmptyResults),
            None => Err(FetchError::Decode("missing `results` array".to_string())),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self) -> FetchResult<T> {
        let mut request = self.client.get(&self.endpoint);
        if let Some(gender) = self.gender {
            request = request.query(&[("gender", gender.as_str())]);
        }
        let response = request.send().await?;
        decode(response).await
    }
}

impl Default for RandomUserClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileSource for RandomUserClient {
    async fn fetch_person(&self) -> FetchResult<Person> {
        let envelope: RandomUserResponse = self.get_json().await?;
        envelope.into_first().ok_or(FetchError::EmptyResults)
    }

    fn label(&self) -> &str {
        "direct"
    }
}

/// Client for the proxy's `/user` route, which returns a bare record.
#[derive(Clone, Debug)]
pub struct ProxyClient {
    client: Client,
    url: String,
    gender: Option<GenderFilter>,
}

impl ProxyClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            gender: None,
        }
    }

    pub fn gender(mut self, gender: Option<GenderFilter>) -> Self {
        self.gender = gender;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for ProxyClient {
    fn default() -> Self {
        Self::new(DEFAULT_PROXY_URL)
    }
}

#[async_trait]
impl ProfileSource for ProxyClient {
    async fn fetch_person(&self) -> FetchResult<Person> {
        let mut request = self.client.get(&self.url);
        if let Some(gender) = self.gender {
            request = request.query(&[("gender", gender.as_str())]);
        }
        let response = request.send().await?;
        decode(response).await
    }

    fn label(&self) -> &str {
        "proxy"
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> FetchResult<T> {
    let status = response.status();

    if status.is_success() {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(FetchError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_filter_parse() {
        assert_eq!("male".parse::<GenderFilter>(), Ok(GenderFilter::Male));
        assert_eq!("female".parse::<GenderFilter>(), Ok(GenderFilter::Female));
        assert!("Male".parse::<GenderFilter>().is_err());
        assert!("other".parse::<GenderFilter>().is_err());
    }

    #[test]
    fn lenient_parse_drops_unknown_values() {
        assert_eq!(GenderFilter::parse_lenient(Some("female")), Some(GenderFilter::Female));
        assert_eq!(GenderFilter::parse_lenient(Some("robot")), None);
        assert_eq!(GenderFilter::parse_lenient(None), None);
    }

    #[test]
    fn default_endpoints() {
        assert_eq!(RandomUserClient::new().endpoint(), RANDOM_USER_API_URL);
        assert_eq!(ProxyClient::default().url(), DEFAULT_PROXY_URL);
        assert_eq!(RandomUserClient::new().label(), "direct");
        assert_eq!(ProxyClient::default().label(), "proxy");
    }
}
