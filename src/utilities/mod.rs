pub mod call;
pub mod config;
pub mod debug;
pub mod direction;
pub mod elevator_status;
pub mod error;
pub mod event;
pub mod logging;
pub mod request;
pub mod requests;
pub mod timer;

/// A floor number. May be negative for basements.
pub type Floor = i32;
