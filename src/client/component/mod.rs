pub mod header;
pub mod layout;
pub mod logout_button;
pub mod page;
pub mod protected_layout;

pub use header::Header;
pub use layout::Layout;
pub use logout_button::LogoutButton;
pub use page::Page;
pub use protected_layout::RequiresLoggedIn;
