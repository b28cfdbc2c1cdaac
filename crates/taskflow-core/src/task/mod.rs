//! Task domain module.
//!
//! This module contains all task-related domain models and the gateway
//! interface through which every task mutation reaches the remote store.
//!
//! # Module Structure
//!
//! - `model`: Core task domain models (`Task`, `TaskStatus`, `Priority`,
//!   `TaskDraft`) and validation
//! - `gateway`: Task gateway trait and the record query types it accepts

mod model;
pub mod gateway;

// Re-export public API
pub use model::{
    DESCRIPTION_MAX, NewTaskRecord, Priority, TITLE_MAX, Task, TaskDraft, TaskId, TaskPatch,
    TaskStatus,
};

pub use gateway::{Direction, OrderBy, Paging, RecordQuery, TaskGateway};
