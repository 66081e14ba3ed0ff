use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::UserId;

/// JWT payload as issued by the registration/login flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user id)
    pub email: String,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(user_id: UserId, email: &str, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}

/// Identity derived from a verified credential. Lives for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthClaim {
    pub user_id: UserId,
}

impl TryFrom<Claims> for AuthClaim {
    type Error = String;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        claims
            .sub
            .parse::<UserId>()
            .map(|user_id| AuthClaim { user_id })
            .map_err(|e| format!("subject '{}' is not a user id: {}", claims.sub, e))
    }
}
