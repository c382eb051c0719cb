use crate::domain::model::{Coordinates, NetworkAddress, PassWindow};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Output rendering selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait ConfigProvider: Send + Sync {
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> &str;
    fn pass_limit(&self) -> Option<usize>;
    fn output_format(&self) -> OutputFormat;
}

/// Looks up the caller's public address. One outbound call per invocation.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(&self) -> Result<NetworkAddress>;
}

/// Looks up approximate coordinates for an address.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve(&self, address: &NetworkAddress) -> Result<Coordinates>;
}

/// Looks up upcoming passes over the given coordinates, in service order.
#[async_trait]
pub trait PassPredictor: Send + Sync {
    async fn resolve(&self, coords: &Coordinates) -> Result<Vec<PassWindow>>;
}
