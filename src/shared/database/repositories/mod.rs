// All repositories module
pub mod auth;
pub mod catalog;
pub mod payment;

// Re-export all repositories for convenience
pub use auth::*;
pub use catalog::*;
pub use payment::*;
