//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer, the schema
//! wrappers for domain errors and the bearer-token security scheme. The
//! document backs Swagger UI in debug builds and is exported by the
//! `openapi-dump` binary.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::blogs::{BlogResponse, CreateBlogBody};
use crate::inbound::http::login::{LoginRequest, LoginResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{RegisterRequest, UserResponse};

/// Name of the bearer security scheme in the generated document.
pub const BEARER_SCHEME: &str = "BearerToken";

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        let mut scheme = Http::new(HttpAuthScheme::Bearer);
        scheme.description = Some("Token issued by POST /api/login.".to_owned());
        components.add_security_scheme(BEARER_SCHEME, SecurityScheme::Http(scheme));
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Bloglist backend API",
        description = "Share blog links, like them and list them by popularity."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::list_users,
        crate::inbound::http::login::login,
        crate::inbound::http::login::logout,
        crate::inbound::http::blogs::list_blogs,
        crate::inbound::http::blogs::create_blog,
        crate::inbound::http::blogs::get_blog,
        crate::inbound::http::blogs::like_blog,
        crate::inbound::http::blogs::delete_blog,
        crate::inbound::http::testing::reset,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserResponse,
        RegisterRequest,
        LoginRequest,
        LoginResponse,
        BlogResponse,
        CreateBlogBody
    )),
    tags(
        (name = "users", description = "User registration and directory"),
        (name = "auth", description = "Bearer token issue and revocation"),
        (name = "blogs", description = "Blog entries, likes and ranking"),
        (name = "testing", description = "End-to-end test support"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
