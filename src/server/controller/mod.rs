//! HTTP request handlers.
//!
//! Controllers check access, call into the service layer and convert domain models
//! into DTOs. Every read-list endpoint delegates to [`listing::list_endpoint`].

pub mod auth;
pub mod classes;
pub mod listing;
pub mod manifest;
pub mod quran;
pub mod role;
pub mod tag;

#[cfg(test)]
mod test;
