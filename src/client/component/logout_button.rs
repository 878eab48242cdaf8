use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::{
    api::auth::AuthClient,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Signs the user out and returns them to the login page.
///
/// A failed sign-out leaves the user where they are with an inline error, since the
/// server-side session may still be valid.
#[component]
pub fn LogoutButton() -> Element {
    let mut pending = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let auth_context = use_context::<AuthContext>();
    #[cfg(feature = "web")]
    let nav = navigator();

    let on_click = move |_: MouseEvent| {
        if pending() {
            return;
        }
        pending.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        {
            let mut auth_context = auth_context;
            spawn(async move {
                match AuthClient::detect().sign_out().await {
                    Ok(()) => {
                        auth_context.set(AuthState::NotLoggedIn);
                        nav.push(Route::Login {});
                    }
                    Err(err) => {
                        tracing::error!("Failed to sign out: {}", err);
                        error.set(Some(format!("Gagal keluar: {}", err)));
                        pending.set(false);
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "row",
            if let Some(message) = error() {
                span { class: "text-error", "{message}" }
            }
            button {
                class: "btn btn-outline",
                disabled: pending(),
                onclick: on_click,
                if pending() { "Keluar..." } else { "Keluar" }
            }
        }
    }
}
