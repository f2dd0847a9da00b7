use serde::{Deserialize, Serialize};

/// User entity - a registered account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Registration payload carrying the plaintext password.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Partial profile update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// A validated user row ready for insertion. Produced by [`crate::hooks::before_create`].
#[derive(Debug, Clone)]
pub struct UserInsert {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// A validated partial update. Produced by [`crate::hooks::before_update`].
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}
