use actix_cors::Cors;
use actix_web::http::header;

use crate::config::opt_var;

/// Origins allowed when `CORS_ALLOWED_ORIGINS` yields nothing usable.
const FALLBACK_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

/// Parse a comma-separated origin list, keeping only http(s) entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect()
}

/// CORS for both services: explicit origins from `CORS_ALLOWED_ORIGINS`,
/// only the methods and headers the APIs use.
pub fn cors_middleware() -> Cors {
    let mut origins = parse_origins(&opt_var("CORS_ALLOWED_ORIGINS").unwrap_or_default());
    if origins.is_empty() {
        origins = FALLBACK_ORIGINS.iter().map(|s| s.to_string()).collect();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(&origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::parse_origins;

    #[test]
    fn keeps_only_http_origins() {
        let origins = parse_origins(" http://localhost:5173 ,null,,ftp://x, https://surveys.example.com/");
        assert_eq!(
            origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://surveys.example.com".to_string()
            ]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_origins("").is_empty());
    }
}
