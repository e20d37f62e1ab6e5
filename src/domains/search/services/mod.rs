// Search domain services
pub mod search_service;
pub mod state;

pub use search_service::*;
pub use state::*;
