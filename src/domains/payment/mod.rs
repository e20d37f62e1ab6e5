// Payment domain module
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod signature;
pub mod store;

pub use models::*;
pub use routes::*;
pub use services::*;
