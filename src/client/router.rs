use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{Home, Login, NotFound, Register};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/login")]
        Login {},

        #[route("/register")]
        Register {},

        #[layout(RequiresLoggedIn)]
            #[route("/")]
            Home {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
