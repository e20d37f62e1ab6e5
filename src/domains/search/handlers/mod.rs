// Search domain handlers
pub mod search_handler;

pub use search_handler::*;
