//! Bearer-token authentication extractor.
//!
//! Handlers that need a caller identity take an [`AuthenticatedUser`]
//! argument; extraction reads `Authorization: Bearer <token>` and resolves it
//! through the [`LoginService`](crate::domain::ports::LoginService) port.

use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::{BearerToken, Error, UserId};
use crate::inbound::http::state::HttpState;

const BEARER_SCHEME: &str = "bearer";

/// Caller identity resolved from a bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    user_id: UserId,
    token: BearerToken,
}

impl AuthenticatedUser {
    /// Identifier of the user the token was issued for.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// The token presented with this request.
    pub fn token(&self) -> &BearerToken {
        &self.token
    }
}

/// Extract the bearer token from request headers.
///
/// # Examples
/// ```
/// use actix_web::http::header::{AUTHORIZATION, HeaderMap, HeaderValue};
/// use bloglist::inbound::http::auth::bearer_token;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));
/// assert_eq!(bearer_token(&headers).unwrap().expose(), "abc123");
/// ```
pub fn bearer_token(headers: &HeaderMap) -> Result<BearerToken, Error> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("missing bearer token"))?;
    let raw = value
        .to_str()
        .map_err(|_| Error::unauthorized("authorization header is not valid ASCII"))?;

    let (scheme, token) = raw
        .split_once(' ')
        .ok_or_else(|| Error::unauthorized("malformed authorization header"))?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(Error::unauthorized("authorization scheme must be Bearer"));
    }
    BearerToken::parse(token).ok_or_else(|| Error::unauthorized("missing bearer token"))
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let headers = req.headers().clone();
        // Parse inside the future so errors capture the request's trace id.
        Box::pin(async move {
            let state = state.ok_or_else(|| Error::internal("HTTP state is not configured"))?;
            let token = bearer_token(&headers)?;
            let user_id = state.login.resolve(&token).await?;
            Ok(Self { user_id, token })
        })
    }
}
