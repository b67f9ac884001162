//! # Use Cases
//!
//! One type per business operation. Each is a fixed linear pipeline:
//! verify preconditions, then perform at most one durable write. A
//! failed step aborts the pipeline before any side effect. Capabilities
//! arrive by constructor injection; the instances hold no request state
//! and are safe to share across overlapping requests.

pub mod auth;
pub mod comment;
pub mod reply;
pub mod thread;
pub mod user;

pub use auth::*;
pub use comment::*;
pub use reply::*;
pub use thread::*;
pub use user::*;
