use std::collections::HashMap;
use std::sync::Arc;

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};
use tokio::sync::RwLock;

use crate::user::UserRepository;
use crate::{BackendError, BackendResult};
use entity::prelude::*;

/// An authenticated operator session. Tokens are opaque and live only
/// in process memory: persistence is disabled by design, every process
/// start begins unauthenticated.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: i32,
    pub email: String,
}

#[derive(Clone, Debug)]
pub struct Auth {
    users: UserRepository,
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl Auth {
    pub fn new(users: UserRepository) -> Self {
        Self {
            users,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Session> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(BackendError::Auth(
                "an account with this email already exists".to_string(),
            ));
        }

        let user = UserEntity {
            email: email.to_string(),
            password_hash: hash_password(password)?,
            ..Default::default()
        };
        let user_id = self.users.save(user).await?;

        Ok(self.open_session(user_id, email).await)
    }

    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> BackendResult<Session> {
        let user = self.users.find_by_email(email).await?;

        let Some(user) = user else {
            return Err(invalid_credentials());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(invalid_credentials());
        }

        Ok(self.open_session(user.id, email).await)
    }

    pub async fn sign_out(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    pub async fn session(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    async fn open_session(&self, user_id: i32, email: &str) -> Session {
        let session = Session {
            token: uuid::Uuid::new_v4().to_string(),
            user_id,
            email: email.to_string(),
        };

        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());

        session
    }
}

fn invalid_credentials() -> BackendError {
    BackendError::Auth("invalid email or password".to_string())
}

fn hash_password(password: &str) -> BackendResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| BackendError::Auth(e.to_string()))
}

fn verify_password(password: &str, stored_hash: &str) -> BackendResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| BackendError::Auth(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(BackendError::Auth(e.to_string())),
    }
}
