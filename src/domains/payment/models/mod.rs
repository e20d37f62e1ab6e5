// Payment domain models
pub mod transaction;
pub mod notification;

pub use transaction::*;
pub use notification::*;
