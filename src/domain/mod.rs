// Domain layer: contact models and the transport/config ports.

pub mod model;
pub mod ports;
