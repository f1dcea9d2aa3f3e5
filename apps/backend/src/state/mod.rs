pub mod auth_state;
pub mod security_config;
pub mod survey_state;
