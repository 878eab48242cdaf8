//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let role = factory::role::create_role(&db).await?;
//!     factory::user_role::create_user_role(&db, user.id, role.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let surah = factory::quran_meta::QuranMetaFactory::new(&db)
//!     .id(2)
//!     .surah_name("Al-Baqarah")
//!     .total_ayat(286)
//!     .build()
//!     .await?;
//! ```

pub mod account;
pub mod classes;
pub mod helpers;
pub mod master_tag;
pub mod quran_meta;
pub mod role;
pub mod user;
pub mod user_role;

pub use classes::create_class;
pub use master_tag::create_tag;
pub use quran_meta::create_surah;
pub use role::create_role;
pub use user::create_user;
pub use user_role::create_user_role;
