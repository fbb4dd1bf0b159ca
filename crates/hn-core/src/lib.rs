//! hn-core: shared foundation for huenet.
//!
//! Contains:
//! - numeric (Real + float/degree helpers)
//! - ids (compact node IDs)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HnError, HnResult};
pub use ids::*;
pub use numeric::*;
