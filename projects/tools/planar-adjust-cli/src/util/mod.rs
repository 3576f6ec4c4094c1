mod throughput;

pub use throughput::*;
