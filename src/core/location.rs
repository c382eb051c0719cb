use crate::core::http::fetch_body;
use crate::domain::model::{Coordinates, NetworkAddress};
use crate::domain::ports::LocationResolver;
use crate::utils::error::{FlyoverError, Result};
use crate::utils::validation::{validate_url, Validate};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://ipwho.is/";

/// ipwho.is answers 200 even for failed lookups; `success` carries the outcome.
#[derive(Debug, Deserialize)]
struct IpWhoIsResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
}

pub struct HttpLocationResolver {
    client: Client,
    endpoint: String,
}

impl HttpLocationResolver {
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Appends the address as the last path segment of the endpoint.
    fn lookup_url(&self, address: &NetworkAddress) -> Result<Url> {
        let mut url = validate_url("location endpoint", &self.endpoint)?;
        url.path_segments_mut()
            .map_err(|_| FlyoverError::InvalidConfigValueError {
                field: "location endpoint".to_string(),
                value: self.endpoint.clone(),
                reason: "URL cannot take path segments".to_string(),
            })?
            .pop_if_empty()
            .push(address.as_str());
        Ok(url)
    }
}

#[async_trait]
impl LocationResolver for HttpLocationResolver {
    async fn resolve(&self, address: &NetworkAddress) -> Result<Coordinates> {
        address.validate()?;

        let url = self.lookup_url(address)?;
        tracing::debug!("Fetching coordinates from: {}", url);
        let body = fetch_body(self.client.get(url), "coordinates").await?;

        let parsed: IpWhoIsResponse = serde_json::from_str(&body)?;
        if !parsed.success {
            return Err(FlyoverError::service(format!(
                "lookup failed for address {}: {}",
                address,
                parsed.message.as_deref().unwrap_or("no reason given")
            )));
        }

        let (Some(latitude), Some(longitude)) = (parsed.latitude, parsed.longitude) else {
            return Err(FlyoverError::parse(
                "successful lookup is missing latitude or longitude",
            ));
        };

        let coords = Coordinates {
            latitude,
            longitude,
        };
        coords
            .validate()
            .map_err(|e| FlyoverError::parse(e.message()))?;

        Ok(coords)
    }
}
