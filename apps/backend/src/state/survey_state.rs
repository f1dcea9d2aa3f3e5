use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::validator::TokenValidator;

/// Shared state of the survey service.
#[derive(Clone)]
pub struct SurveyState {
    /// Pooled store connection
    pub db: DatabaseConnection,
    /// Resolves bearer tokens on submission and admin routes
    pub validator: Arc<dyn TokenValidator>,
}

impl SurveyState {
    pub fn new(db: DatabaseConnection, validator: Arc<dyn TokenValidator>) -> Self {
        Self { db, validator }
    }
}
