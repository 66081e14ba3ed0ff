use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::{
    db::Database,
    errors::AppResult,
    models::{
        domain::UserId,
        dto::response::{UserProfile, UserSummary},
    },
};

const FIND_PROFILE_SQL: &str = r#"
    SELECT id, email, name, phone, COALESCE(phone_verified, FALSE) AS phone_verified
    FROM users
    WHERE id = $1
"#;

const LIST_WITH_CALCULATORS_SQL: &str = r#"
    SELECT
        u.id,
        u.name,
        u.email,
        u.phone,
        COALESCE(
            ARRAY_AGG(DISTINCT c.name::text) FILTER (WHERE c.name IS NOT NULL),
            '{}'::text[]
        ) AS calculators_used
    FROM users u
    LEFT JOIN user_calculators uc ON uc.user_id = u.id
    LEFT JOIN calculators c ON c.id = uc.calculator_id
    GROUP BY u.id
    ORDER BY u.created_at DESC
"#;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_profile_by_id(&self, id: UserId) -> AppResult<Option<UserProfile>>;
    /// Every user with the distinct calculators they used, newest user first.
    async fn list_with_calculators(&self) -> AppResult<Vec<UserSummary>>;
    async fn ping(&self) -> AppResult<()>;
}

#[derive(FromRow)]
struct UserSummaryRow {
    id: UserId,
    name: String,
    email: String,
    phone: Option<String>,
    calculators_used: Vec<String>,
}

impl From<UserSummaryRow> for UserSummary {
    fn from(row: UserSummaryRow) -> Self {
        UserSummary::from_parts(row.id, row.name, row.email, row.phone, row.calculators_used)
    }
}

pub struct PostgresUserRepository {
    db: Database,
}

impl PostgresUserRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    fn pool(&self) -> &PgPool {
        self.db.pool()
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_profile_by_id(&self, id: UserId) -> AppResult<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(FIND_PROFILE_SQL)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(profile)
    }

    async fn list_with_calculators(&self) -> AppResult<Vec<UserSummary>> {
        let rows = sqlx::query_as::<_, UserSummaryRow>(LIST_WITH_CALCULATORS_SQL)
            .fetch_all(self.pool())
            .await?;

        log::debug!("Listed {} users with calculator usage", rows.len());

        Ok(rows.into_iter().map(UserSummary::from).collect())
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}
