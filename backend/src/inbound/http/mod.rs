//! HTTP inbound adapter exposing REST endpoints.
//!
//! ```text
//! POST   /api/users           register
//! GET    /api/users           list users
//! POST   /api/login           issue a bearer token
//! POST   /api/logout          revoke the presented token
//! GET    /api/blogs           ranked listing
//! POST   /api/blogs           create (authenticated)
//! GET    /api/blogs/{id}      fetch one
//! PUT    /api/blogs/{id}      like (authenticated)
//! DELETE /api/blogs/{id}      delete (owner only)
//! POST   /api/testing/reset   wipe state (testing builds only)
//! ```

use actix_web::{Scope, web};

pub mod auth;
pub mod blogs;
pub mod error;
pub mod health;
pub mod login;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod testing;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Build the `/api` scope with JSON body errors mapped to domain errors.
/// The reset route is only mounted when `testing_endpoints` is set.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bloglist::inbound::http::api_scope;
///
/// let app = App::new().service(api_scope(false));
/// ```
pub fn api_scope(testing_endpoints: bool) -> Scope {
    let scope = web::scope("/api")
        .app_data(validation::json_config())
        .service(users::register)
        .service(users::list_users)
        .service(login::login)
        .service(login::logout)
        .service(blogs::list_blogs)
        .service(blogs::create_blog)
        .service(blogs::get_blog)
        .service(blogs::like_blog)
        .service(blogs::delete_blog);

    if testing_endpoints {
        scope.service(testing::reset)
    } else {
        scope
    }
}
