use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::User;

/// Identity claims embedded in a session token. There is no `exp` claim and
/// no revocation store: a token stays valid until the signing key changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub username: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    pub iat: usize,
}

impl Claims {
    pub fn new(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
            iat: Utc::now().timestamp() as usize,
        }
    }
}
