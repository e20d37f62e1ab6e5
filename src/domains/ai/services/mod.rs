// AI domain services
pub mod ai_service;
pub mod state;

pub use ai_service::*;
pub use state::*;
