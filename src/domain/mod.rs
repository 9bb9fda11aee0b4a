// Domain layer: value objects, the portfolio aggregate and its ports.

pub mod model;
pub mod portfolio;
pub mod ports;
