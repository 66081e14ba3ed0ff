use std::sync::Arc;

use actix_web::HttpRequest;

use crate::{
    auth::{JwtService, TokenVerifier},
    config::Config,
    db::Database,
    diagnostics::{Diagnostics, LogDiagnostics},
    errors::{AppError, AppResult},
    middleware::get_request_id,
    repositories::{PostgresUserRepository, UserRepository},
    services::UserService,
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub token_verifier: Arc<dyn TokenVerifier>,
    pub diagnostics: Arc<dyn Diagnostics>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(PostgresUserRepository::new(&db));
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        Ok(Self::from_parts(
            user_repository,
            jwt_service,
            Arc::new(LogDiagnostics),
            config,
        ))
    }

    pub fn from_parts(
        user_repository: Arc<dyn UserRepository>,
        token_verifier: Arc<dyn TokenVerifier>,
        diagnostics: Arc<dyn Diagnostics>,
        config: Config,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(user_repository)),
            token_verifier,
            diagnostics,
            config: Arc::new(config),
        }
    }

    /// Hands `error` to diagnostics and gives it back for propagation.
    pub fn report(&self, route: &str, req: &HttpRequest, error: AppError) -> AppError {
        let request_id = get_request_id(req);
        self.diagnostics.report(route, request_id.as_deref(), &error);
        error
    }
}
