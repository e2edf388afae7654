//! Blog entry handlers.
//!
//! ```text
//! GET    /api/blogs
//! POST   /api/blogs {"title":"...","author":"...","url":"..."}
//! GET    /api/blogs/{id}
//! PUT    /api/blogs/{id}
//! DELETE /api/blogs/{id}
//! ```
//!
//! `PUT` records exactly one like and ignores any request body, so a stale
//! client counter can never overwrite concurrent likes.

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::BlogEntry;
use crate::domain::ports::CreateBlogRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_blog_id, require};

const TITLE: FieldName = FieldName::new("title");
const AUTHOR: FieldName = FieldName::new("author");
const URL: FieldName = FieldName::new("url");

/// Body for `POST /api/blogs`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateBlogBody {
    #[schema(example = "Type wars")]
    pub title: Option<String>,
    #[schema(example = "Robert C. Martin")]
    pub author: Option<String>,
    #[schema(example = "http://blog.cleancoder.com/uncle-bob/2016/05/01/TypeWars.html")]
    pub url: Option<String>,
}

impl CreateBlogBody {
    fn into_request(self) -> ApiResult<CreateBlogRequest> {
        Ok(CreateBlogRequest {
            title: require(self.title, TITLE)?,
            author: require(self.author, AUTHOR)?,
            url: require(self.url, URL)?,
        })
    }
}

/// Blog entry as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    #[schema(example = "6f1c1b9e-3f5a-4a55-9df9-2f6f3c1a7e10")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    #[schema(example = 3)]
    pub likes: u64,
    /// Identifier of the user who created the entry.
    pub user: String,
    pub created_at: DateTime<Utc>,
}

impl From<&BlogEntry> for BlogResponse {
    fn from(entry: &BlogEntry) -> Self {
        Self {
            id: entry.id().to_string(),
            title: entry.title().to_owned(),
            author: entry.author().to_owned(),
            url: entry.url().to_owned(),
            likes: entry.likes(),
            user: entry.owner().to_string(),
            created_at: entry.created_at(),
        }
    }
}

/// List entries, most liked first, ties in creation order.
#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "Ranked entries", body = [BlogResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "listBlogs",
    security([])
)]
#[get("/blogs")]
pub async fn list_blogs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BlogResponse>>> {
    let entries = state.blogs_query.list().await?;
    Ok(web::Json(entries.iter().map(BlogResponse::from).collect()))
}

/// Publish a new entry owned by the caller.
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogBody,
    responses(
        (status = 201, description = "Entry created", body = BlogResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "createBlog"
)]
#[post("/blogs")]
pub async fn create_blog(
    state: web::Data<HttpState>,
    caller: AuthenticatedUser,
    payload: web::Json<CreateBlogBody>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner().into_request()?;
    let entry = state.blogs.create(caller.user_id(), request).await?;
    Ok(HttpResponse::Created().json(BlogResponse::from(&entry)))
}

/// Fetch one entry.
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog identifier")),
    responses(
        (status = 200, description = "Entry", body = BlogResponse),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "getBlog",
    security([])
)]
#[get("/blogs/{id}")]
pub async fn get_blog(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BlogResponse>> {
    let id = parse_blog_id(&path)?;
    let entry = state.blogs_query.get(&id).await?;
    Ok(web::Json(BlogResponse::from(&entry)))
}

/// Record one like on an entry.
#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog identifier")),
    responses(
        (status = 200, description = "Updated entry", body = BlogResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "likeBlog"
)]
#[put("/blogs/{id}")]
pub async fn like_blog(
    state: web::Data<HttpState>,
    _caller: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<BlogResponse>> {
    let id = parse_blog_id(&path)?;
    let entry = state.blogs.like(&id).await?;
    Ok(web::Json(BlogResponse::from(&entry)))
}

/// Delete an entry. Only its creator may do so.
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog identifier")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Caller is not the creator", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "deleteBlog"
)]
#[delete("/blogs/{id}")]
pub async fn delete_blog(
    state: web::Data<HttpState>,
    caller: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_blog_id(&path)?;
    state.blogs.delete(&id, caller.user_id()).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "blogs_tests.rs"]
mod tests;
