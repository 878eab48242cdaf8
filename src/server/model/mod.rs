//! Server-side domain models, query projections and parameter types.
//!
//! Entity models are converted into these types at the repository boundary and into
//! DTOs at the controller boundary. The `listing` module defines the `ListResource`
//! abstraction every read-list endpoint is built from; each resource module implements
//! it for its table.

pub mod classes;
pub mod listing;
pub mod quran;
pub mod role;
pub mod tag;
pub mod user;
