use dioxus::prelude::*;

use crate::client::{component::Header, router::Route};

/// Fixed header above every routed page.
#[component]
pub fn Layout() -> Element {
    rsx!(
        Header {}
        main {
            Outlet::<Route> {}
        }
    )
}
