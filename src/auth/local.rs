//! Local credential database.
//!
//! A `users` table in its own SQLite file, passwords stored as SHA-256
//! digests. Good enough for the single-operator offline deployment; a
//! hosted provider replaces this wholesale through the [`Authenticator`]
//! seam.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use sha2::{Digest, Sha256};

use crate::auth::{validate_credentials, AuthError, AuthUser, Authenticator};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    _id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)";

#[derive(Clone)]
pub struct LocalAuthenticator {
    conn: Arc<Mutex<Connection>>,
}

impl LocalAuthenticator {
    pub fn open(path: &Path) -> Result<Self, AuthError> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                let _ = std::fs::create_dir_all(dir);
            }
        }
        Self::from_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, AuthError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, AuthError> {
        conn.execute(CREATE_TABLE, [])?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn stored_hash(&self, email: &str) -> Result<Option<String>, rusqlite::Error> {
        self.conn
            .lock()
            .query_row(
                "SELECT password FROM users WHERE username = ?1",
                params![email],
                |row| row.get(0),
            )
            .optional()
    }
}

fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

impl Authenticator for LocalAuthenticator {
    fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        validate_credentials(email, password, false)?;
        let email = email.trim();
        match self.stored_hash(email)? {
            Some(stored) if stored == hash_password(password) => Ok(AuthUser {
                email: email.to_string(),
            }),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    fn register(&self, email: &str, password: &str) -> Result<(), AuthError> {
        validate_credentials(email, password, true)?;
        let email = email.trim();
        if self.stored_hash(email)?.is_some() {
            return Err(AuthError::AlreadyRegistered {
                email: email.to_string(),
            });
        }
        self.conn.lock().execute(
            "INSERT INTO users (username, password) VALUES (?1, ?2)",
            params![email, hash_password(password)],
        )?;
        tracing::info!(email, "account registered");
        Ok(())
    }
}
