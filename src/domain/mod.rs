// Domain layer: client configuration, response types and the transport port.

pub mod model;
pub mod ports;
