// Domain layer: cart models, user-facing notices and the ports the store depends on.

pub mod model;
pub mod notice;
pub mod ports;
