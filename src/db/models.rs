use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A registered user as stored in the directory and returned on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

impl User {
    pub fn new(id: u64, submission: NewUser) -> Self {
        Self {
            id,
            firstname: submission.first_name,
            lastname: submission.last_name,
            email: submission.email,
            password: submission.password,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            is_admin: true,
        }
    }
}

/// Registration submission. Absent fields arrive as empty strings and fail validation.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful login payload.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}
