//! Tracing middleware attaching a request-scoped trace identifier.
//!
//! The identifier is taken from a well-formed inbound `trace-id` header or
//! generated fresh, installed with [`TraceId::scope`] for the rest of the
//! request, and echoed in the response headers. One `info` event per request
//! records method, path, status and the identifier.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{error, info};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware assigning each request a [`TraceId`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use employee_service::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

fn inbound_trace_id(req: &ServiceRequest) -> Option<TraceId> {
    req.headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.parse().ok())
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = inbound_trace_id(&req).unwrap_or_else(TraceId::generate);
        let method = req.method().clone();
        let path = req.path().to_owned();
        // Extraction runs when the inner future is polled, inside the scope.
        let service_call = TraceId::scope(trace_id, self.service.call(req));
        Box::pin(async move {
            let mut res = service_call.await?;
            info!(
                %method,
                path = %path,
                status = res.status().as_u16(),
                %trace_id,
                "request handled"
            );
            match HeaderValue::from_str(&trace_id.to_string()) {
                Ok(value) => {
                    res.response_mut()
                        .headers_mut()
                        .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                }
                Err(error) => {
                    error!(%error, %trace_id, "failed to encode trace identifier header");
                }
            }
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiResult, Error as DomainError};
    use crate::inbound::http::error::ApiError;
    use actix_web::{App, HttpResponse, test, web};

    async fn call_traced<F, Fut, Res>(
        handler: F,
        request: test::TestRequest,
    ) -> (
        actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
        String,
    )
    where
        F: Fn() -> Fut + Clone + 'static,
        Fut: std::future::Future<Output = Res> + 'static,
        Res: actix_web::Responder + 'static,
    {
        let app =
            test::init_service(App::new().wrap(Trace).route("/", web::get().to(handler))).await;
        let res = test::call_service(&app, request.uri("/").to_request()).await;
        let trace_id = res
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header")
            .to_str()
            .expect("header is ascii")
            .to_owned();
        (res, trace_id)
    }

    #[actix_web::test]
    async fn exposes_trace_id_in_handler() {
        let (res, trace_id) = call_traced(
            || async move {
                let id = TraceId::current().expect("trace id in scope");
                HttpResponse::Ok().body(id.to_string())
            },
            test::TestRequest::get(),
        )
        .await;

        let body = test::read_body(res).await;
        assert_eq!(std::str::from_utf8(&body).expect("utf8 body"), trace_id);
    }

    #[actix_web::test]
    async fn reuses_well_formed_inbound_trace_id() {
        let inbound = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
        let (_, trace_id) = call_traced(
            || async { HttpResponse::Ok().finish() },
            test::TestRequest::get().insert_header((TRACE_ID_HEADER, inbound)),
        )
        .await;

        assert_eq!(trace_id, inbound);
    }

    #[actix_web::test]
    async fn replaces_malformed_inbound_trace_id() {
        let (_, trace_id) = call_traced(
            || async { HttpResponse::Ok().finish() },
            test::TestRequest::get().insert_header((TRACE_ID_HEADER, "nope")),
        )
        .await;

        assert!(trace_id.parse::<TraceId>().is_ok());
    }

    #[actix_web::test]
    async fn propagates_trace_id_in_error() {
        let (res, trace_id) = call_traced(
            || async move { ApiResult::<HttpResponse>::Err(DomainError::internal("boom")) },
            test::TestRequest::get(),
        )
        .await;

        let body: ApiError = test::read_body_json(res).await;
        assert_eq!(body.trace_id.as_deref(), Some(trace_id.as_str()));
    }
}
