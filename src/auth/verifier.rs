use actix_web::HttpRequest;

use crate::{auth::claims::AuthClaim, errors::AppError};

/// Validates the credential carried by a request.
///
/// Implementations return `None` for every failure; the reason is theirs to log.
pub trait TokenVerifier: Send + Sync {
    fn authenticate(&self, req: &HttpRequest) -> Option<AuthClaim>;
}

/// Runs `verifier` against `req`, mapping a rejection to `AppError::Unauthorized`.
pub fn require_claim(
    verifier: &dyn TokenVerifier,
    req: &HttpRequest,
) -> Result<AuthClaim, AppError> {
    verifier
        .authenticate(req)
        .ok_or_else(|| AppError::Unauthorized("credential missing or rejected".to_string()))
}
