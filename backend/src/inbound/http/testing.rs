//! Test-only collaborator endpoint.
//!
//! Mounted by [`api_scope`](super::api_scope) only when testing endpoints are
//! enabled in configuration; otherwise the route does not exist.

use actix_web::{HttpResponse, post, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Remove every blog, user and session.
#[utoipa::path(
    post,
    path = "/api/testing/reset",
    responses(
        (status = 204, description = "State cleared"),
        (status = 404, description = "Testing endpoints disabled"),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["testing"],
    operation_id = "resetState",
    security([])
)]
#[post("/testing/reset")]
pub async fn reset(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    state.reset.reset().await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    use crate::inbound::http::api_scope;
    use crate::inbound::http::test_utils::MockPorts;

    async fn post_reset(ports: MockPorts, testing_endpoints: bool) -> StatusCode {
        let app = actix_test::init_service(
            App::new()
                .app_data(ports.into_state())
                .service(api_scope(testing_endpoints)),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/api/testing/reset")
            .to_request();
        actix_test::call_service(&app, req).await.status()
    }

    #[rstest]
    #[actix_web::test]
    async fn reset_is_mounted_when_enabled() {
        let mut ports = MockPorts::default();
        ports.reset.expect_reset().times(1).return_once(|| Ok(()));
        assert_eq!(post_reset(ports, true).await, StatusCode::NO_CONTENT);
    }

    #[rstest]
    #[actix_web::test]
    async fn reset_is_absent_when_disabled() {
        let mut ports = MockPorts::default();
        ports.reset.expect_reset().times(0);
        assert_eq!(post_reset(ports, false).await, StatusCode::NOT_FOUND);
    }
}
