// Domain layer: catalog records and the ports the loaders and engine depend on.

pub mod model;
pub mod ports;
