// Domain layer: the decoded input, the sum, and the ports the pipeline is built on.

pub mod model;
pub mod ports;
