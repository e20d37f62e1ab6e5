// AI domain handlers
pub mod ai_handler;

pub use ai_handler::*;
