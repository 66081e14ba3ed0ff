use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::domain::{User, UserId};

/// The fields of a user that an authenticated caller may see about themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub phone_verified: bool,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        UserProfile {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            phone_verified: user.phone_verified,
        }
    }
}

/// One entry of the public user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(rename = "calculatorsUsed")]
    pub calculators_used: Vec<String>,
}

impl UserSummary {
    /// Builds a summary; calculator names are deduplicated and sorted.
    pub fn new<I>(user: &User, calculator_names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self::from_parts(
            user.id,
            user.name.clone(),
            user.email.clone(),
            user.phone.clone(),
            calculator_names,
        )
    }

    pub fn from_parts<I>(
        id: UserId,
        name: String,
        email: String,
        phone: Option<String>,
        calculator_names: I,
    ) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut calculators_used: Vec<String> = calculator_names.into_iter().collect();
        calculators_used.sort();
        calculators_used.dedup();

        UserSummary {
            id,
            name,
            email,
            phone,
            calculators_used,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub success: bool,
    pub user: UserProfile,
}

impl VerifyTokenResponse {
    pub fn new(user: UserProfile) -> Self {
        Self {
            success: true,
            user,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UsersListResponse {
    pub users: Vec<UserSummary>,
}
