//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::ServiceSettings;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use employee_service::Trace;
#[cfg(debug_assertions)]
use employee_service::doc::ApiDoc;
use employee_service::inbound::http::employees;
use employee_service::inbound::http::error::configure_extractors;
use employee_service::inbound::http::health::{HealthState, live, ready};
use employee_service::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_extractors)
        .configure(employees::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Readiness is marked once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig { bind_addr, .. } = config;

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

/// Clear liveness once `shutdown` resolves successfully.
///
/// Actix drains the workers on the same signal; `/health/live` reports 503
/// meanwhile.
pub async fn clear_liveness_when<F>(shutdown: F, health_state: web::Data<HealthState>)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    match shutdown.await {
        Ok(()) => {
            health_state.mark_unhealthy();
            info!("shutdown requested; liveness cleared");
        }
        Err(error) => warn!(%error, "shutdown signal listener failed"),
    }
}
