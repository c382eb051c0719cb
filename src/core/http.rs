use crate::utils::error::{FlyoverError, Result};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("iss-flyover/", env!("CARGO_PKG_VERSION"));

/// Builds the client shared by all three lookups.
pub fn build_client(timeout_seconds: u64, user_agent: &str) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        // run_blocking drives each run on its own runtime; idle connections would outlive it
        .pool_max_idle_per_host(0)
        .build()?;
    Ok(client)
}

/// Sends `request` and returns the body text of a 2xx response.
///
/// Anything else becomes a `ServiceError` carrying the status and body.
pub(crate) async fn fetch_body(request: RequestBuilder, what: &str) -> Result<String> {
    let response = request.send().await?;
    let status = response.status();
    tracing::debug!("{} response status: {}", what, status);

    let body = response.text().await?;
    if !status.is_success() {
        return Err(FlyoverError::service(format!(
            "Status Code {} when fetching {}. Response: {}",
            status.as_u16(),
            what,
            body
        )));
    }

    Ok(body)
}
