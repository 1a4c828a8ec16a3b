//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Surrogate key of a user row
///
/// Every owned resource is scoped by this value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User entity as stored, including the password hash
///
/// Deliberately not `Serialize`: only [`PublicUser`] leaves this crate.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public projection of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Normalized registration or login credentials
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Result of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGrant {
    pub token: String,
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_never_carries_the_hash() {
        let user = User {
            id: UserId::new(7),
            email: "a@b.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(PublicUser::from(user)).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(object["id"], 7);
        assert_eq!(object["email"], "a@b.com");
        assert!(object.contains_key("created_at"));
        assert!(!json.to_string().contains("argon2"));
    }

    #[test]
    fn user_id_serializes_as_a_plain_number() {
        assert_eq!(serde_json::to_string(&UserId::new(42)).unwrap(), "42");
    }
}
