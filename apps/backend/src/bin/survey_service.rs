use actix_web::{web, App, HttpServer};
use backend::config::server::ServerConfig;
use backend::infra::state::build_survey_state;
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
    // DATABASE_URL (required), AUTH_SERVICE_URL or JWT_SECRET (one required),
    // SURVEY_HOST, SURVEY_PORT, CORS_ALLOWED_ORIGINS.
    let server = match ServerConfig::from_env("SURVEY", 8080) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    // Connects and migrates; any failure here aborts startup.
    let survey_state = match build_survey_state().build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build survey state: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Database connected and migrated");
    println!(
        "🚀 Starting survey service on http://{}:{}",
        server.host, server.port
    );

    let data = web::Data::new(survey_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure_survey)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
