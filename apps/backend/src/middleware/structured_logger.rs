use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn, Level};

use crate::middleware::request_trace::TraceId;

/// Emits one `request_completed` event per request, at a level chosen by
/// the status class. Must be wrapped by `RequestTrace` to see the trace id.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().to_string();
        // Path only: query strings may carry tokens (/auth/validate?token=).
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };

            RequestCompletion {
                method,
                path,
                status,
                elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
                trace_id,
            }
            .emit();

            result
        })
    }
}

/// Summary of one finished request.
struct RequestCompletion {
    method: String,
    path: String,
    status: StatusCode,
    elapsed_ms: f64,
    trace_id: String,
}

impl RequestCompletion {
    fn emit(&self) {
        let status = self.status.as_u16();
        let level = severity(self.status);
        if level == Level::ERROR {
            error!(
                method = %self.method,
                path = %self.path,
                status,
                elapsed_ms = self.elapsed_ms,
                trace_id = %self.trace_id,
                "request_completed"
            );
        } else if level == Level::WARN {
            warn!(
                method = %self.method,
                path = %self.path,
                status,
                elapsed_ms = self.elapsed_ms,
                trace_id = %self.trace_id,
                "request_completed"
            );
        } else {
            info!(
                method = %self.method,
                path = %self.path,
                status,
                elapsed_ms = self.elapsed_ms,
                trace_id = %self.trace_id,
                "request_completed"
            );
        }
    }
}

/// 5xx is an error, 4xx a warning, anything else informational.
fn severity(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}
