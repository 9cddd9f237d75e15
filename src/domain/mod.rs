// Domain layer: request records and the ports the validator is fed through.

pub mod model;
pub mod ports;
