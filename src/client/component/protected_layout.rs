use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Renders the nested route only for signed-in users, redirecting everyone else to login.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if matches!(&*auth_context.read(), AuthState::NotLoggedIn) {
            nav.push(Route::Login {});
        }
    });

    let state = auth_context.read();

    rsx! {
        match &*state {
            AuthState::Initializing => rsx! { LoadingPage {} },
            AuthState::Authenticated(_) => rsx! { Outlet::<Route> {} },
            AuthState::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            // Render nothing while redirecting
            AuthState::NotLoggedIn => rsx! {},
        }
    }
}
