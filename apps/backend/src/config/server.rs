use crate::config::opt_var;
use crate::error::AppError;

/// Bind address of one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `<PREFIX>_HOST` / `<PREFIX>_PORT`, e.g. `AUTH_HOST`, `SURVEY_PORT`.
    pub fn from_env(prefix: &str, default_port: u16) -> Result<Self, AppError> {
        Self::from_values(
            opt_var(&format!("{prefix}_HOST")),
            opt_var(&format!("{prefix}_PORT")),
            prefix,
            default_port,
        )
    }

    pub fn from_values(
        host: Option<String>,
        port: Option<String>,
        prefix: &str,
        default_port: u16,
    ) -> Result<Self, AppError> {
        let host = host.unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("{prefix}_PORT must be a valid port number, got '{raw}'"))
            })?,
            None => default_port,
        };
        Ok(Self { host, port })
    }
}
