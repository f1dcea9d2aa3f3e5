use actix_web::{web, App, HttpServer};
use backend::config::server::ServerConfig;
use backend::infra::state::build_auth_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::structured_logger::StructuredLogger;
use backend::middleware::trace_span::TraceSpan;
use backend::routes;
use backend::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // JWT_SECRET (required), AUTH_USERS, AUTH_HOST, AUTH_PORT, CORS_ALLOWED_ORIGINS.
    let server = match ServerConfig::from_env("AUTH", 8081) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let auth_state = match build_auth_state().build() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build auth state: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting auth service on http://{}:{}",
        server.host, server.port
    );

    let data = web::Data::new(auth_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure_auth)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
