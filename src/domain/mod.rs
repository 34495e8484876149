// Domain layer: transient value types and the clock seam. No I/O here.

pub mod model;
pub mod ports;
