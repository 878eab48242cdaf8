//! SeaORM entities for the tahfidz database schema.

pub mod prelude;

pub mod account;
pub mod classes;
pub mod master_tags;
pub mod quran_meta;
pub mod role;
pub mod user;
pub mod user_role;
