use crate::core::address::HttpAddressResolver;
use crate::core::http::build_client;
use crate::core::location::HttpLocationResolver;
use crate::core::passes::HttpPassPredictor;
use crate::domain::model::PassWindow;
use crate::domain::ports::{AddressResolver, ConfigProvider, LocationResolver, PassPredictor};
use crate::utils::error::{Result, Stage};

/// Chains address → location → passes, stopping at the first failure.
///
/// The engine holds no state between runs, so one instance may be run any
/// number of times, and separate runs may proceed concurrently.
pub struct FlyoverEngine<A, L, P> {
    address: A,
    location: L,
    passes: P,
}

pub type HttpFlyoverEngine =
    FlyoverEngine<HttpAddressResolver, HttpLocationResolver, HttpPassPredictor>;

impl<A, L, P> FlyoverEngine<A, L, P>
where
    A: AddressResolver,
    L: LocationResolver,
    P: PassPredictor,
{
    pub fn new(address: A, location: L, passes: P) -> Self {
        Self {
            address,
            location,
            passes,
        }
    }

    /// Runs the three lookups in order. Failures carry the stage they came from.
    pub async fn run(&self) -> Result<Vec<PassWindow>> {
        let address = self
            .address
            .resolve()
            .await
            .map_err(|e| e.at_stage(Stage::Address))?;
        tracing::debug!("Resolved public address: {}", address);

        let coords = self
            .location
            .resolve(&address)
            .await
            .map_err(|e| e.at_stage(Stage::Location))?;
        tracing::debug!(
            "Resolved coordinates: lat={} lon={}",
            coords.latitude,
            coords.longitude
        );

        let passes = self
            .passes
            .resolve(&coords)
            .await
            .map_err(|e| e.at_stage(Stage::Passes))?;
        tracing::debug!("Received {} pass windows", passes.len());

        Ok(passes)
    }

    /// Blocking form of [`run`](Self::run). Panics if called from inside an
    /// async runtime, like any `block_on`.
    pub fn run_blocking(&self) -> Result<Vec<PassWindow>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.run())
    }
}

impl HttpFlyoverEngine {
    /// Wires the three HTTP lookups onto one client built from `config`.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = build_client(config.timeout_seconds(), config.user_agent())?;
        Ok(Self::new(
            HttpAddressResolver::new(client.clone()),
            HttpLocationResolver::new(client.clone()),
            HttpPassPredictor::new(client),
        ))
    }
}

/// Next pass windows for this machine's public address.
pub async fn next_passes_for_my_location<C: ConfigProvider>(config: &C) -> Result<Vec<PassWindow>> {
    HttpFlyoverEngine::from_config(config)?.run().await
}

pub fn next_passes_for_my_location_blocking<C: ConfigProvider>(
    config: &C,
) -> Result<Vec<PassWindow>> {
    HttpFlyoverEngine::from_config(config)?.run_blocking()
}
