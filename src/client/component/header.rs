use dioxus::prelude::*;

use crate::client::{
    component::LogoutButton,
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Header() -> Element {
    let auth_context = use_context::<AuthContext>();
    let state = auth_context.read();

    rsx!(div {
        class: "header",
        Link {
            to: Route::Home {},
            class: "brand",
            {SITE_NAME}
        }
        div {
            class: "row",
            match &*state {
                AuthState::Authenticated(user) => rsx! {
                    p { class: "muted", "{user.name}" }
                    LogoutButton {}
                },
                AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                    Link { to: Route::Login {}, class: "btn btn-outline", "Masuk" }
                    Link { to: Route::Register {}, class: "btn", "Daftar" }
                },
                AuthState::Initializing => rsx! {},
            }
        }
    })
}
