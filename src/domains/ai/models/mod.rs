// AI domain models
pub mod ai_log;
pub mod generation;

pub use ai_log::*;
pub use generation::*;
