// Catalog repositories (theses, datasets, AI logs)
pub mod thesis_repository;
pub mod dataset_repository;
pub mod ai_log_repository;

pub use thesis_repository::*;
pub use dataset_repository::*;
pub use ai_log_repository::*;
