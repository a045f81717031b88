// Domain layer: shot records, categorical factor tables, and ports.

pub mod model;
pub mod ports;
