// Dataset domain models
pub mod dataset;

pub use dataset::*;
