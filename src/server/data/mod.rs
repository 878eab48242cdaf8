//! Database repository layer for all domain entities.
//!
//! Repositories hold a reference to the database connection, use SeaORM entity models
//! internally and return domain models so the layers above never see entity types.

pub mod account;
pub mod listing;
pub mod user;

#[cfg(test)]
mod test;
