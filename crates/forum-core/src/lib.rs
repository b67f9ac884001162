//! forum-core
//!
//! The central domain logic and interface definitions for the forum API:
//! self-validating entities, the capability traits that infrastructure
//! adapters must implement, and the use cases that orchestrate them.

pub mod entities;
pub mod error;
pub mod traits;
pub mod usecase;

// Re-exporting for easier access in other crates
pub use entities::*;
pub use error::*;
pub use traits::*;
pub use usecase::*;
