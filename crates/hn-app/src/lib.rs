//! Shared application service layer for huenet.
//!
//! This crate sits between the color engine and any front end. It owns the
//! in-memory network store and exposes the create/read/update operations,
//! returning serializable snapshots.

pub mod config;
pub mod error;
pub mod protocol;
pub mod service;
pub mod snapshot;
pub mod store;

// Re-export key types for convenience
pub use config::{AppConfig, DefaultsConfig, LayoutConfig, LimitsConfig, load_config};
pub use error::{AppError, AppResult, ErrorKind};
pub use protocol::{Request, Response, handle_line};
pub use service::{CreateRequest, NetworkService, UpdateMode, UpdateRequest};
pub use snapshot::{EdgeView, ErrorResponse, NetworkResponse, NetworkSnapshot, NodeView};
pub use store::{NetworkId, NetworkStore};
