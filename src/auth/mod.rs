pub mod claims;
pub mod jwt;
pub mod verifier;

pub use claims::{AuthClaim, Claims};
pub use jwt::JwtService;
pub use verifier::{require_claim, TokenVerifier};
