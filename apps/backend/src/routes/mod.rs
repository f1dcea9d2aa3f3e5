use actix_web::web;

pub mod auth;
pub mod health;
pub mod surveys;

/// Routes of the auth service.
///
/// Binaries wrap these with CORS and the tracing middleware; tests register
/// them bare so endpoint behavior can be exercised directly.
pub fn configure_auth(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_auth_routes);
    cfg.service(web::scope("/auth").configure(auth::configure_routes));
}

/// Routes of the survey service.
pub fn configure_survey(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::configure_survey_routes)
            .service(web::scope("/surveys").configure(surveys::configure_routes)),
    );
}
