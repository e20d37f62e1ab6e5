// Shared errors
pub mod auth_error;
pub mod payment_error;
pub mod dataset_error;
pub mod search_error;
pub mod ai_error;

pub use auth_error::*;
pub use payment_error::*;
pub use dataset_error::*;
pub use search_error::*;
pub use ai_error::*;
