//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Input normalization, validation and credential checks
//! - **Orchestration**: Coordinating repository calls
//! - **Domain Models**: Working with domain models rather than entity models

pub mod auth;
pub mod listing;

#[cfg(test)]
mod test;
