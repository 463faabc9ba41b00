use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Opaque bcrypt hash, never sent over the wire.
    #[serde(skip_serializing, default)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Registration payload handed to the storage backend; the backend assigns the id.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
