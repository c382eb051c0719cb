pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::orchestrator::{
    next_passes_for_my_location, next_passes_for_my_location_blocking, FlyoverEngine,
    HttpFlyoverEngine,
};
pub use crate::domain::model::{Coordinates, NetworkAddress, PassWindow};
pub use crate::utils::error::{FlyoverError, Result, Stage};
