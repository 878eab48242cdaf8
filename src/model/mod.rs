//! Data transfer objects shared between the server API and the web client.
//!
//! Every type here crosses the HTTP boundary as JSON. Field names are serialized in
//! camelCase to match what the client and any existing consumers expect.

pub mod api;
pub mod auth;
pub mod classes;
pub mod quran;
pub mod role;
pub mod tag;
pub mod user;
