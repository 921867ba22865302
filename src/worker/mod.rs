//! Lambda handler and per-notification processing

pub mod forwarder;
pub mod handler;

// Re-export the main handler for convenience
pub use forwarder::Forwarder;
pub use handler::handler;
