use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Serialize;

use crate::auth::claims::Role;
use crate::auth::validator::Principal;
use crate::error::AppError;
use crate::extractors::auth_token::AuthToken;
use crate::state::survey_state::SurveyState;

/// Caller of a survey-service request, resolved through the configured
/// `TokenValidator`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

impl From<Principal> for CurrentUser {
    fn from(p: Principal) -> Self {
        Self {
            username: p.username,
            role: p.role,
        }
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = AuthToken::extract(&req).await?;

            let state = req
                .app_data::<web::Data<SurveyState>>()
                .ok_or_else(|| AppError::internal("SurveyState not available"))?;

            let principal = state.validator.validate(&token.token).await?;
            Ok(CurrentUser::from(principal))
        })
    }
}
