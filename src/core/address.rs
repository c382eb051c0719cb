use crate::core::http::fetch_body;
use crate::domain::model::NetworkAddress;
use crate::domain::ports::AddressResolver;
use crate::utils::error::{FlyoverError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://api.ipify.org?format=json";

#[derive(Debug, Deserialize)]
struct IpifyResponse {
    ip: String,
}

/// Resolves the public address through an ipify-style JSON endpoint.
pub struct HttpAddressResolver {
    client: Client,
    endpoint: String,
}

impl HttpAddressResolver {
    pub fn new(client: Client) -> Self {
        Self::with_endpoint(client, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AddressResolver for HttpAddressResolver {
    async fn resolve(&self) -> Result<NetworkAddress> {
        tracing::debug!("Fetching public address from: {}", self.endpoint);
        let body = fetch_body(self.client.get(&self.endpoint), "IP").await?;

        let parsed: IpifyResponse = serde_json::from_str(&body)?;
        let address = NetworkAddress::new(parsed.ip);
        address
            .validate()
            .map_err(|e| FlyoverError::parse(e.message()))?;

        Ok(address)
    }
}
