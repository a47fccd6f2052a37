//! In-memory user store.
//!
//! Holds the registered users for the lifetime of the process. Nothing is
//! persisted; the store starts empty and dies with the process.

use chrono::Utc;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::registration::Registration;

/// One registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub age: u32,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Insertion-ordered collection of user records.
///
/// The write lock covers both the length read and the append, so ids stay
/// unique and increasing even when registrations race across worker
/// threads. Ids are derived from the store length at insertion time; with
/// no delete operation they are unique for the life of the process.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record with id = current length + 1 and the current
    /// UTC time as creation timestamp. Returns a copy of the stored record.
    pub async fn register(&self, registration: Registration) -> User {
        let mut users = self.users.write().await;
        let user = User {
            id: users.len() as u64 + 1,
            name: registration.name,
            age: registration.age,
            created_at: Utc::now().to_rfc3339(),
        };
        users.push(user.clone());
        user
    }

    /// Snapshot of all users in insertion order.
    pub async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    /// First record whose id matches, if any.
    pub async fn get(&self, id: u64) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }
}
