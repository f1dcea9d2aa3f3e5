use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::auth::claims::{Claims, Role};
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Lifetime of an access token.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Mint a HS256 JWT access token with a 24-hour TTL.
pub fn mint_access_token(
    sub: &str,
    role: Role,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<(String, Claims), AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let claims = Claims {
        sub: sub.to_string(),
        role,
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    let token = encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))?;

    Ok((token, claims))
}

/// Verify a JWT and return its claims.
///
/// Expired, tampered, malformed and wrongly signed tokens all collapse into
/// `AppError::InvalidToken`; the cause is only logged at debug level.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    if token.is_empty() {
        return Err(AppError::MissingToken);
    }

    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        debug!(reason = ?e.kind(), "token rejected");
        AppError::InvalidToken
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    use super::{mint_access_token, verify_access_token, TOKEN_TTL_SECS};
    use crate::auth::claims::{Claims, Role};
    use crate::state::security_config::SecurityConfig;
    use crate::AppError;

    fn security() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
    }

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let security = security();
        let now = SystemTime::now();

        let (token, minted) = mint_access_token("admin", Role::Admin, now, &security).unwrap();
        let claims = verify_access_token(&token, &security).unwrap();

        assert_eq!(claims, minted);
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(
            claims.iat,
            now.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64
        );
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_expired_token() {
        let security = security();
        // 25 hours ago so the 24-hour token is expired
        let then = SystemTime::now() - Duration::from_secs(25 * 60 * 60);

        let (token, _) = mint_access_token("user", Role::User, then, &security).unwrap();
        let result = verify_access_token(&token, &security);

        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_bad_signature() {
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let (token, _) =
            mint_access_token("user", Role::User, SystemTime::now(), &security_a).unwrap();

        let security_b = SecurityConfig::new("secret-B".as_bytes());
        let result = verify_access_token(&token, &security_b);

        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_tampered_signature() {
        let security = security();
        let (token, _) =
            mint_access_token("user", Role::User, SystemTime::now(), &security).unwrap();

        let sig_start = token.rfind('.').unwrap() + 1;
        let mid = sig_start + (token.len() - sig_start) / 2;
        let mut bytes = token.into_bytes();
        bytes[mid] = if bytes[mid] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert!(matches!(
            verify_access_token(&tampered, &security),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_algorithm_rejected() {
        let security = security();
        let claims = Claims {
            sub: "user".into(),
            role: Role::User,
            iat: 0,
            exp: i64::MAX / 2,
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(&security.jwt_secret),
        )
        .unwrap();

        assert!(matches!(
            verify_access_token(&token, &security),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_garbage_and_empty_tokens() {
        let security = security();
        assert!(matches!(
            verify_access_token("not.a.jwt", &security),
            Err(AppError::InvalidToken)
        ));
        assert!(matches!(
            verify_access_token("", &security),
            Err(AppError::MissingToken)
        ));
    }
}
