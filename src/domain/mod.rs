// Domain layer: transient value types and the ports the notations are built
// against. Nothing here depends on the concrete config or core modules.

pub mod model;
pub mod ports;
