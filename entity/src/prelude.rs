pub use super::account::Entity as Account;
pub use super::classes::Entity as Classes;
pub use super::master_tags::Entity as MasterTags;
pub use super::quran_meta::Entity as QuranMeta;
pub use super::role::Entity as Role;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
