// Dataset domain services
pub mod dataset_service;
pub mod state;

pub use dataset_service::*;
pub use state::*;
