//! Users API handlers.
//!
//! ```text
//! POST /api/users {"name":"Andrew Padgett","username":"adp10390","password":"weakpassword"}
//! GET /api/users
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Registration, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, map_registration_error, require};

const NAME: FieldName = FieldName::new("name");
const USERNAME: FieldName = FieldName::new("username");
const PASSWORD: FieldName = FieldName::new("password");

/// Registration body for `POST /api/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "Andrew Padgett")]
    pub name: Option<String>,
    #[schema(example = "adp10390")]
    pub username: Option<String>,
    #[schema(example = "weakpassword")]
    pub password: Option<String>,
}

impl RegisterRequest {
    fn into_registration(self) -> ApiResult<Registration> {
        let name = require(self.name, NAME)?;
        let username = require(self.username, USERNAME)?;
        let password = require(self.password, PASSWORD)?;
        Registration::try_from_parts(&name, &username, &password).map_err(map_registration_error)
    }
}

/// Public view of a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "adp10390")]
    pub username: String,
    #[schema(example = "Andrew Padgett")]
    pub name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            username: user.username().to_string(),
            name: user.display_name().to_string(),
        }
    }
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Username already taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser",
    security([])
)]
#[post("/users")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let registration = payload.into_inner().into_registration()?;
    let user = state.users.register(registration).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(&user)))
}

/// List registered users ordered by username.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bloglist::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.iter().map(UserResponse::from).collect()))
}
