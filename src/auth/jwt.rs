use actix_web::{http::header::Header, HttpRequest};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::{
        claims::{AuthClaim, Claims},
        verifier::TokenVerifier,
    },
    errors::{AppError, AppResult},
    models::domain::UserId,
};

/// HS256 bearer token verifier.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: &SecretString, expiration_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation: Validation::default(),
            expiration_hours,
        }
    }

    /// Issues a token for `user_id`. Login lives elsewhere; this is used by tooling and tests.
    pub fn create_token(&self, user_id: UserId, email: &str) -> AppResult<String> {
        let claims = Claims::new(user_id, email, self.expiration_hours);
        self.encode_claims(&claims)
    }

    pub fn encode_claims(&self, claims: &Claims) -> AppResult<String> {
        encode(&JwtHeader::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }
}

impl TokenVerifier for JwtService {
    fn authenticate(&self, req: &HttpRequest) -> Option<AuthClaim> {
        let header = match Authorization::<Bearer>::parse(req) {
            Ok(header) => header,
            Err(e) => {
                log::debug!("No usable bearer credential: {}", e);
                return None;
            }
        };
        let bearer = header.into_scheme();

        let claims = match self.validate_token(bearer.token()) {
            Ok(claims) => claims,
            Err(e) => {
                log::debug!("Rejected bearer credential: {}", e);
                return None;
            }
        };

        match AuthClaim::try_from(claims) {
            Ok(claim) => Some(claim),
            Err(reason) => {
                log::debug!("Rejected bearer credential: {}", reason);
                None
            }
        }
    }
}
