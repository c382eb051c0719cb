use crate::core::http::fetch_body;
use crate::domain::model::{Coordinates, PassWindow};
use crate::domain::ports::PassPredictor;
use crate::utils::error::{FlyoverError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://iss-flyover.herokuapp.com/json/";

#[derive(Debug, Deserialize)]
struct FlyoverResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    response: Option<Vec<PassWindow>>,
}

pub struct HttpPassPredictor {
    client: Client,
    endpoint: String,
}

impl HttpPassPredictor {
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
impl PassPredictor for HttpPassPredictor {
    async fn resolve(&self, coords: &Coordinates) -> Result<Vec<PassWindow>> {
        coords.validate()?;

        tracing::debug!(
            "Fetching pass windows for lat={} lon={} from: {}",
            coords.latitude,
            coords.longitude,
            self.endpoint
        );
        let request = self.client.get(&self.endpoint).query(&[
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
        ]);
        let body = fetch_body(request, "ISS flyover time").await?;

        let parsed: FlyoverResponse = serde_json::from_str(&body)?;
        if parsed.message.as_deref() == Some("failure") {
            return Err(FlyoverError::service(format!(
                "pass prediction failed: {}",
                parsed.reason.as_deref().unwrap_or("no reason given")
            )));
        }

        // Service order is kept as-is; callers slice for "next N".
        parsed
            .response
            .ok_or_else(|| FlyoverError::parse("prediction is missing the `response` list"))
    }
}
