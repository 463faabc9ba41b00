use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
    models::User,
};

/// Issues and verifies HS256 session tokens. The signing secret is injected
/// once at construction and shared read-only across the process.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn new(secret: &SecretString) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        // Tokens carry no `exp` claim, so expiry validation must be disabled
        // or every token would be rejected as missing a required claim.
        let mut validation = Validation::default();
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
        }
    }

    pub fn issue(&self, user: &User) -> AppResult<String> {
        let claims = Claims::new(user);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to create JWT: {}", e)))
    }

    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_user() -> User {
        User {
            id: 42,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            is_admin: false,
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret);

        let token = jwt_service.issue(&test_user()).unwrap();
        assert!(!token.is_empty());

        let claims = jwt_service.verify(&token).unwrap();
        assert_eq!(claims.id, 42);
        assert_eq!(claims.username, "alice");
        assert!(!claims.is_admin);
    }

    #[test]
    fn test_verify_rejects_malformed_token() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret);

        let result = jwt_service.verify("not.a.token");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_foreign_signature() {
        let config = Config::test_config();
        let issuer = JwtService::new(&SecretString::from("some_other_secret".to_string()));
        let verifier = JwtService::new(&config.jwt_secret);

        let token = issuer.issue(&test_user()).unwrap();
        let result = verifier.verify(&token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }
}
