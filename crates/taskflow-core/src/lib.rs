pub mod auth;
pub mod error;
pub mod task;
pub mod view;

// Re-export common error type
pub use error::FlowError;
