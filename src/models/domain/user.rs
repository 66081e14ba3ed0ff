use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = i32;

/// A registered user as stored in the `users` table.
///
/// Rows are written by the registration flow; this service only reads them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub phone_verified: bool,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: UserId, name: &str, email: &str, created_at: DateTime<Utc>) -> Self {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            phone_verified: false,
            password_hash: String::new(),
            created_at,
        }
    }

    pub fn with_phone(mut self, phone: &str, verified: bool) -> Self {
        self.phone = Some(phone.to_string());
        self.phone_verified = verified;
        self
    }
}

#[cfg(test)]
impl User {
    pub fn assert_fields(&self, id: UserId, name: &str, email: &str) {
        assert_eq!(self.id, id);
        assert_eq!(self.name, name);
        assert_eq!(self.email, email);
    }
}
