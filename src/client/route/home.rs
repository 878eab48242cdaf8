use dioxus::prelude::*;

use crate::{
    client::{
        component::Page,
        constant::SITE_NAME,
        model::{auth::AuthContext, error::ApiError},
    },
    model::{classes::ClassDto, quran::SurahDto, role::RoleDto, tag::TagDto},
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::{get_classes, get_quran, get_roles, get_tags};

/// State of one dashboard section: `None` while loading.
type SectionData<T> = Option<Result<Vec<T>, ApiError>>;

#[component]
pub fn Home() -> Element {
    let auth_context = use_context::<AuthContext>();
    let greeting = auth_context
        .read()
        .user()
        .map(|user| format!("Assalamu'alaikum, {}", user.name))
        .unwrap_or_default();

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "stack",
            h1 { "{greeting}" }
            ClassSection {}
            SurahSection {}
            TagSection {}
            RoleSection {}
        }
    }
}

/// Shows loading, error and empty states, or `None` when rows should be rendered.
fn section_status<T>(data: &SectionData<T>) -> Option<Element> {
    match data {
        None => Some(rsx! { span { class: "spinner" } }),
        Some(Err(err)) => Some(rsx! { p { class: "text-error", "Gagal memuat data: {err}" } }),
        Some(Ok(rows)) if rows.is_empty() => Some(rsx! { p { class: "muted", "Belum ada data" } }),
        Some(Ok(_)) => None,
    }
}

#[component]
fn ClassSection() -> Element {
    let classes = use_signal(|| None::<Result<Vec<ClassDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let mut classes = classes;
        let future = use_resource(get_classes);
        use_effect(move || {
            if let Some(result) = &*future.read() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch classes: {}", err);
                }
                classes.set(Some(result.clone()));
            }
        });
    }

    let data = classes();

    rsx! {
        section {
            class: "card",
            h2 { "Kelas" }
            if let Some(status) = section_status(&data) {
                {status}
            } else if let Some(Ok(rows)) = data {
                table {
                    thead { tr { th { "Nama" } th { "Keterangan" } } }
                    tbody {
                        for class in rows {
                            tr {
                                key: "{class.id}",
                                td { "{class.name}" }
                                td { {class.description.unwrap_or_default()} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SurahSection() -> Element {
    let surahs = use_signal(|| None::<Result<Vec<SurahDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let mut surahs = surahs;
        let future = use_resource(get_quran);
        use_effect(move || {
            if let Some(result) = &*future.read() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch surahs: {}", err);
                }
                surahs.set(Some(result.clone()));
            }
        });
    }

    let data = surahs();

    rsx! {
        section {
            class: "card",
            h2 { "Surah" }
            if let Some(status) = section_status(&data) {
                {status}
            } else if let Some(Ok(rows)) = data {
                table {
                    thead {
                        tr { th { "No" } th { "Nama" } th { "Arab" } th { "Ayat" } th { "Juz" } }
                    }
                    tbody {
                        for surah in rows {
                            tr {
                                key: "{surah.id}",
                                td { "{surah.id}" }
                                td { "{surah.surah_name}" }
                                td { class: "arabic", "{surah.surah_name_arabic}" }
                                td { "{surah.total_ayat}" }
                                td { "{surah.juz_number}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TagSection() -> Element {
    let tags = use_signal(|| None::<Result<Vec<TagDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let mut tags = tags;
        let future = use_resource(get_tags);
        use_effect(move || {
            if let Some(result) = &*future.read() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch tags: {}", err);
                }
                tags.set(Some(result.clone()));
            }
        });
    }

    let data = tags();

    rsx! {
        section {
            class: "card",
            h2 { "Tag" }
            if let Some(status) = section_status(&data) {
                {status}
            } else if let Some(Ok(rows)) = data {
                table {
                    thead { tr { th { "Kategori" } th { "Tag" } th { "Keterangan" } } }
                    tbody {
                        for tag in rows {
                            tr {
                                key: "{tag.id}",
                                td { "{tag.category}" }
                                td { "{tag.tag_text}" }
                                td { {tag.description.unwrap_or_default()} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoleSection() -> Element {
    let roles = use_signal(|| None::<Result<Vec<RoleDto>, ApiError>>);

    #[cfg(feature = "web")]
    {
        let mut roles = roles;
        let future = use_resource(get_roles);
        use_effect(move || {
            if let Some(result) = &*future.read() {
                match result {
                    Err(err) if err.is_unauthorized() => {
                        tracing::warn!("Session rejected while fetching roles")
                    }
                    Err(err) => tracing::error!("Failed to fetch roles: {}", err),
                    Ok(_) => (),
                }
                roles.set(Some(result.clone()));
            }
        });
    }

    let data = roles();

    rsx! {
        section {
            class: "card",
            h2 { "Peran" }
            if let Some(status) = section_status(&data) {
                {status}
            } else if let Some(Ok(rows)) = data {
                table {
                    thead { tr { th { "Nama" } th { "Keterangan" } } }
                    tbody {
                        for role in rows {
                            tr {
                                key: "{role.id}",
                                td { "{role.name}" }
                                td { {role.description.unwrap_or_default()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
