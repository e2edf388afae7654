//! Login and logout handlers.
//!
//! ```text
//! POST /api/login {"username":"adp10390","password":"weakpassword"}
//! POST /api/logout  (Authorization: Bearer <token>)
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, LoginCredentials, LoginValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "adp10390")]
    pub username: String,
    #[schema(example = "weakpassword")]
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Successful login payload.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Bearer token for the `Authorization` header.
    pub token: String,
    #[schema(example = "adp10390")]
    pub username: String,
    #[schema(example = "Andrew Padgett")]
    pub name: String,
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::invalid_request("username must not be empty")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Verify credentials and issue a bearer token.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Wrong username or password", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let outcome = state.login.login(&credentials).await?;
    Ok(web::Json(LoginResponse {
        token: outcome.token.expose().to_owned(),
        username: outcome.user.username().to_string(),
        name: outcome.user.display_name().to_string(),
    }))
}

/// Revoke the presented bearer token.
#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 204, description = "Session revoked"),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(
    state: web::Data<HttpState>,
    caller: AuthenticatedUser,
) -> ApiResult<HttpResponse> {
    state.login.logout(caller.token()).await?;
    Ok(HttpResponse::NoContent().finish())
}
