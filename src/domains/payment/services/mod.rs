pub mod payment_service;
pub mod state;

pub use payment_service::{NotificationOutcome, PaymentService};
pub use state::PaymentState;
