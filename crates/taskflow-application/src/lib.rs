//! Application layer for TaskFlow.
//!
//! This crate provides the stores that cache remote state and the facade
//! through which the presentation layer issues intents: every task mutation
//! is gated on the authenticated principal before it may reach the task
//! store's gateway-calling operations.

pub mod app;
pub mod auth_store;
pub mod task_store;

pub use app::TaskFlowApp;
pub use auth_store::AuthStore;
pub use task_store::TaskStore;
