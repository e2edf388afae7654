//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
use state_builders::build_http_state;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use bloglist::Trace;
#[cfg(debug_assertions)]
use bloglist::doc::ApiDoc;
use bloglist::inbound::http::api_scope;
use bloglist::inbound::http::health::{HealthState, live, ready};
use bloglist::inbound::http::state::HttpState;
use bloglist::outbound::crypto::Argon2Hasher;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    testing_endpoints: bool,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        testing_endpoints,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope(testing_endpoints))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        testing_endpoints,
        session_ttl,
    } = config;

    let http_state = build_http_state(
        Arc::new(Argon2Hasher::new()),
        Arc::new(DefaultClock),
        session_ttl,
    );
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            testing_endpoints,
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, testing_endpoints, "server bound");
    health_state.mark_ready();
    Ok(server)
}
