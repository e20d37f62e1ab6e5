// Domain modules
pub mod ai;
pub mod auth;
pub mod dataset;
pub mod payment;
pub mod search;
