//! Liveness and readiness checks.
//!
//! Readiness starts false and flips once the listener is bound. Liveness
//! starts true and is cleared by [`HealthState::mark_unhealthy`], which the
//! server calls when an interrupt starts shutdown.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Health flags shared between the server bootstrap and the handlers.
#[derive(Debug)]
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

fn health_response(ok: bool) -> HttpResponse {
    let mut response = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness check: 200 once the server accepts traffic, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    health_response(state.is_ready())
}

/// Liveness check: 200 while alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    health_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    async fn status_of(state: web::Data<HealthState>, uri: &str) -> StatusCode {
        let app =
            actix_test::init_service(App::new().app_data(state).service(ready).service(live))
                .await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        actix_test::call_service(&app, request).await.status()
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_flips_once_marked() {
        let state = web::Data::new(HealthState::new());
        assert_eq!(
            status_of(state.clone(), "/health/ready").await,
            StatusCode::SERVICE_UNAVAILABLE
        );

        state.mark_ready();

        assert_eq!(status_of(state, "/health/ready").await, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn liveness_fails_after_marked_unhealthy() {
        let state = web::Data::new(HealthState::new());
        assert_eq!(status_of(state.clone(), "/health/live").await, StatusCode::OK);

        state.mark_unhealthy();

        assert_eq!(
            status_of(state, "/health/live").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
