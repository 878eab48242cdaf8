use axum::{
    routing::{get, post},
    Router,
};
use utoipa::{
    openapi::{self, server::Server},
    OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        auth::{SessionDto, SignInDto, SignOutDto, SignUpDto},
        classes::ClassDto,
        quran::SurahDto,
        role::RoleDto,
        tag::TagDto,
        user::UserDto,
    },
    server::{
        controller::{
            auth::{self, get_session, sign_in, sign_out, sign_up},
            classes::{self, get_classes},
            manifest::get_manifest,
            quran::{self, get_quran},
            role::{self, get_roles},
            tag::{self, get_tags},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tahfidz Monitoring API",
        description = "Read endpoints for classes, surahs, tags and roles, plus email and password authentication"
    ),
    paths(
        auth::sign_up,
        auth::sign_in,
        auth::sign_out,
        auth::get_session,
        role::get_roles,
        classes::get_classes,
        quran::get_quran,
        tag::get_tags,
    ),
    components(schemas(
        ErrorDto,
        SignUpDto,
        SignInDto,
        SignOutDto,
        SessionDto,
        UserDto,
        RoleDto,
        ClassDto,
        SurahDto,
        TagDto,
    )),
    tags(
        (name = "auth", description = "Email and password sessions"),
        (name = "role", description = "Role administration"),
        (name = "kelas", description = "Classes of students"),
        (name = "quran", description = "Surah metadata"),
        (name = "tag", description = "Annotation tags")
    )
)]
pub struct ApiDoc;

/// OpenAPI document with `app_url` as its only server entry.
pub fn openapi(app_url: &str) -> openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(app_url.trim_end_matches('/'))]);
    doc
}

pub fn router(app_url: &str) -> Router<AppState> {
    Router::new()
        .route("/api/auth/sign-up/email", post(sign_up))
        .route("/api/auth/sign-in/email", post(sign_in))
        .route("/api/auth/sign-out", post(sign_out))
        .route("/api/auth/get-session", get(get_session))
        .route("/api/admin/roles", get(get_roles))
        .route("/api/kelas", get(get_classes))
        .route("/api/quran", get(get_quran))
        .route("/api/tags", get(get_tags))
        .route("/manifest.webmanifest", get(get_manifest))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi(app_url)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_configured_app_url_as_server() {
        let doc = openapi("https://tahfidz.example/");

        let servers = doc.servers.unwrap();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].url, "https://tahfidz.example");
    }

    #[test]
    fn openapi_documents_every_api_route() {
        let doc = openapi("http://localhost:8080");

        for path in [
            "/api/auth/sign-up/email",
            "/api/auth/sign-in/email",
            "/api/auth/sign-out",
            "/api/auth/get-session",
            "/api/admin/roles",
            "/api/kelas",
            "/api/quran",
            "/api/tags",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
