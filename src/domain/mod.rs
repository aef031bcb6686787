// Domain layer: content models and ports. No HTTP or filesystem types here.

pub mod model;
pub mod ports;
