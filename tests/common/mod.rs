#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use secrecy::SecretString;
use tokio::sync::RwLock;

use calchub_server::{
    app_state::AppState,
    auth::JwtService,
    config::{Config, RouteAuth},
    diagnostics::RecordingDiagnostics,
    errors::{AppError, AppResult},
    models::{
        domain::{User, UserId},
        dto::response::{UserProfile, UserSummary},
    },
    repositories::UserRepository,
};

pub const TEST_JWT_SECRET: &str = "integration_test_jwt_secret_value";

#[derive(Clone, Debug)]
pub struct Calculator {
    pub id: i32,
    pub name: String,
}

impl Calculator {
    pub fn new(id: i32, name: &str) -> Self {
        Calculator {
            id,
            name: name.to_string(),
        }
    }
}

/// One row of `user_calculators`; the same pair may repeat.
#[derive(Clone, Copy, Debug)]
struct UsageRecord {
    user_id: UserId,
    calculator_id: i32,
}

/// In-memory form of the listing query: newest user first, usage of
/// unknown calculators skipped, users without usage get an empty list.
fn summarize_usage(
    users: &[User],
    calculators: &[Calculator],
    usage: &[UsageRecord],
) -> Vec<UserSummary> {
    let names: HashMap<i32, &str> = calculators
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut ordered: Vec<&User> = users.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    ordered
        .into_iter()
        .map(|user| {
            let used = usage
                .iter()
                .filter(|record| record.user_id == user.id)
                .filter_map(|record| names.get(&record.calculator_id))
                .map(|name| name.to_string());
            UserSummary::new(user, used)
        })
        .collect()
}

/// `UserRepository` backed by vectors, following the same listing rules as the SQL.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
    calculators: RwLock<Vec<Calculator>>,
    usage: RwLock<Vec<UsageRecord>>,
    offline: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, user: User) {
        self.users.write().await.push(user);
    }

    pub async fn add_calculator(&self, calculator: Calculator) {
        self.calculators.write().await.push(calculator);
    }

    pub async fn record_usage(&self, user_id: UserId, calculator_id: i32) {
        self.usage
            .write()
            .await
            .push(UsageRecord {
                user_id,
                calculator_id,
            });
    }

    pub async fn set_created_at(&self, user_id: UserId, created_at: DateTime<Utc>) {
        let mut users = self.users.write().await;
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.created_at = created_at;
        }
    }

    /// Makes every call fail like a lost database connection.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    fn check_online(&self) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(
                "error communicating with database: Connection refused (os error 111)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_profile_by_id(&self, id: UserId) -> AppResult<Option<UserProfile>> {
        self.check_online()?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).map(UserProfile::from))
    }

    async fn list_with_calculators(&self) -> AppResult<Vec<UserSummary>> {
        self.check_online()?;
        let users = self.users.read().await;
        let calculators = self.calculators.read().await;
        let usage = self.usage.read().await;
        Ok(summarize_usage(&users, &calculators, &usage))
    }

    async fn ping(&self) -> AppResult<()> {
        self.check_online()
    }
}

pub fn test_config(users_listing: RouteAuth) -> Config {
    Config {
        app_env: "test".to_string(),
        database_url: SecretString::from("postgres://localhost/calchub_test".to_string()),
        db_max_connections: 1,
        db_min_connections: 1,
        db_acquire_timeout_secs: 1,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
        jwt_secret: SecretString::from(TEST_JWT_SECRET.to_string()),
        jwt_expiration_hours: 1,
        cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        users_listing,
    }
}

pub fn jwt_service() -> JwtService {
    JwtService::new(&SecretString::from(TEST_JWT_SECRET.to_string()), 1)
}

pub fn bearer_for(user_id: UserId) -> String {
    let token = jwt_service()
        .create_token(user_id, &format!("user{}@example.com", user_id))
        .unwrap();
    format!("Bearer {}", token)
}

pub struct TestApp {
    pub state: AppState,
    pub repo: Arc<InMemoryUserRepository>,
    pub diagnostics: Arc<RecordingDiagnostics>,
}

pub fn build_state(users_listing: RouteAuth) -> TestApp {
    let repo = Arc::new(InMemoryUserRepository::new());
    let diagnostics = Arc::new(RecordingDiagnostics::new());
    let state = AppState::from_parts(
        repo.clone(),
        Arc::new(jwt_service()),
        diagnostics.clone(),
        test_config(users_listing),
    );

    TestApp {
        state,
        repo,
        diagnostics,
    }
}

pub fn user(id: UserId, name: &str, email: &str, minutes_ago: i64) -> User {
    User::new(id, name, email, Utc::now() - Duration::minutes(minutes_ago))
}
