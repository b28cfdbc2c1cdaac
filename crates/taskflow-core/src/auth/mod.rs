//! Authentication domain module.
//!
//! # Module Structure
//!
//! - `model`: Opaque identity payload and the auth status state machine
//! - `gateway`: Authentication gateway trait (session read, interactive
//!   login, session clear)

mod model;
pub mod gateway;

// Re-export public API
pub use model::{AuthStatus, Identity};

pub use gateway::AuthGateway;
