// Domain layer: value types and the ports the presentation side implements.

pub mod model;
pub mod ports;
