// Domain layer: transient value types and the two capability traits.

pub mod model;
pub mod ports;
