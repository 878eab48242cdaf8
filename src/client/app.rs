use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[cfg(feature = "web")]
use crate::client::{api::auth::AuthClient, model::auth::AuthState};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let auth_context = use_context_provider(AuthContext::new);

    // Resolve the session once on first load
    #[cfg(feature = "web")]
    {
        let mut auth_context = auth_context;
        let session = use_resource(|| async { AuthClient::detect().get_session().await });

        use_effect(move || {
            if let Some(result) = &*session.read() {
                auth_context.set(match result {
                    Ok(session) => AuthState::from(session.clone()),
                    Err(e) => AuthState::Error(e.clone()),
                });
            }
        });
    }

    #[cfg(not(feature = "web"))]
    let _ = auth_context;

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "manifest", href: "/manifest.webmanifest" }
        document::Meta { name: "theme-color", content: "#047857" }
        document::Meta {
            name: "description",
            content: "Monitoring hafalan Al-Qur'an santri"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
