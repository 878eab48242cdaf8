use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "page {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        Page {
            class: "page-centered",
            span { class: "spinner" }
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        Page {
            class: "page-centered",
            div {
                class: "stack",
                h1 { class: "error-status", "{status}" }
                p { "{message}" }
            }
        }
    )
}
