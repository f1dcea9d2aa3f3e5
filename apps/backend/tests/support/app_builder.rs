//! Test service builders: production routes and tracing middleware, no CORS.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error as ActixError};
use backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backend::{routes, AuthState, SurveyState};

pub async fn auth_app(
    state: AuthState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure_auth),
    )
    .await
}

pub async fn survey_app(
    state: SurveyState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure_survey),
    )
    .await
}
