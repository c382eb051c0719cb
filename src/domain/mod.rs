// Domain layer: core models and ports. No HTTP or config concerns here.

pub mod model;
pub mod ports;
