use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::AuthClient;

#[component]
pub fn Register() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        if auth_context.read().is_authenticated() {
            nav.push(Route::Home {});
        }
    });

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        {
            let mut auth_context = auth_context;
            spawn(async move {
                match AuthClient::detect()
                    .sign_up(&name(), &email(), &password())
                    .await
                {
                    Ok(session) => {
                        auth_context.set(AuthState::Authenticated(session.user));
                        nav.push(Route::Home {});
                    }
                    Err(err) => {
                        tracing::warn!("Sign-up failed: {}", err);
                        error.set(Some(err.message));
                        submitting.set(false);
                    }
                }
            });
        }
    };

    let state = auth_context.read();

    rsx! {
        Title { "Daftar | {SITE_NAME}" }
        match &*state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "page-centered",
                    form {
                        class: "card stack",
                        onsubmit: on_submit,
                        h1 { "Daftar" }
                        label {
                            "Nama"
                            input {
                                required: true,
                                value: "{name}",
                                oninput: move |e| name.set(e.value()),
                            }
                        }
                        label {
                            "Email"
                            input {
                                r#type: "email",
                                required: true,
                                value: "{email}",
                                oninput: move |e| email.set(e.value()),
                            }
                        }
                        label {
                            "Kata sandi"
                            input {
                                r#type: "password",
                                required: true,
                                minlength: 8,
                                maxlength: 128,
                                value: "{password}",
                                oninput: move |e| password.set(e.value()),
                            }
                        }
                        if let Some(message) = error() {
                            p { class: "text-error", "{message}" }
                        }
                        button {
                            class: "btn",
                            r#type: "submit",
                            disabled: submitting(),
                            "Daftar"
                        }
                        p {
                            class: "muted",
                            "Sudah punya akun? "
                            Link { to: Route::Login {}, "Masuk" }
                        }
                    }
                }
            }
        }
    }
}
