//! Gateway implementations for TaskFlow.
//!
//! This crate provides the concrete collaborators behind the core gateway
//! traits: the hosted record-store HTTP client, an in-memory record table
//! for tests and offline development, the persisted session blob, and the
//! widget-driven login gateway.

pub mod dto;
pub mod hosted_auth_gateway;
pub mod http_task_gateway;
pub mod memory_task_gateway;
pub mod session_storage;
pub mod static_auth_gateway;

pub use crate::hosted_auth_gateway::{HostedAuthGateway, LoginAttempt, LoginPrompt};
pub use crate::http_task_gateway::HttpTaskGateway;
pub use crate::memory_task_gateway::MemoryTaskGateway;
pub use crate::session_storage::SessionStorage;
pub use crate::static_auth_gateway::StaticAuthGateway;
