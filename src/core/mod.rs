pub mod address;
pub mod http;
pub mod location;
pub mod orchestrator;
pub mod passes;

pub use crate::domain::model::{Coordinates, NetworkAddress, PassWindow};
pub use crate::domain::ports::{AddressResolver, ConfigProvider, LocationResolver, PassPredictor};
pub use crate::utils::error::Result;
