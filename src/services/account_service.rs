use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{NewUser, User},
    storage::Storage,
};

/// Work factor used for new registrations.
const BCRYPT_COST: u32 = 10;

/// Registration and credential verification against whichever backend is
/// active. Passwords are stored only as bcrypt hashes; there is no update
/// or deletion path for users.
pub struct AccountService {
    storage: Arc<dyn Storage>,
}

impl AccountService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<User> {
        // Read-then-write uniqueness check. Two concurrent registrations for
        // the same email can both pass it; that race window is accepted.
        if self.storage.find_user_by_email(email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = bcrypt::hash(password, BCRYPT_COST)?;

        self.storage
            .insert_user(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        let Some(user) = self.storage.find_user_by_email(email).await? else {
            return Err(AppError::InvalidCredentials);
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }
}
