// Search domain models
pub mod search;

pub use search::*;
