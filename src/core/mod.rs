pub mod config;
pub mod conflict;
pub mod email;
pub mod filter;
pub mod log;
pub mod notify;
pub mod reschedule;
pub mod store;
pub mod validate;
