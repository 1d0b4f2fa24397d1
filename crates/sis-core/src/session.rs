//! Session Persistence
//!
//! The signed-in identity survives page reloads through a key/value store
//! (browser local storage in production). It is read once at startup and
//! written on login and logout only.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{Role, Session};
use crate::error::StorageError;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const USER_ROLE_KEY: &str = "userRole";

/// Minimal key/value contract shared by local storage and the test double
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Restore a session; any missing or malformed key means anonymous
pub fn load(storage: &impl SessionStorage) -> Option<Session> {
    let token = storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
    let id = storage.get(USER_ID_KEY)?.parse::<u32>().ok()?;
    let role = Role::parse(&storage.get(USER_ROLE_KEY)?)?;
    Some(Session { id, role, token })
}

pub fn save(storage: &impl SessionStorage, session: &Session) -> Result<(), StorageError> {
    storage.set(TOKEN_KEY, &session.token)?;
    storage.set(USER_ID_KEY, &session.id.to_string())?;
    storage.set(USER_ROLE_KEY, session.role.as_str())
}

/// Remove every session key, attempting all of them even if one fails
pub fn clear(storage: &impl SessionStorage) -> Result<(), StorageError> {
    let results = [
        storage.remove(TOKEN_KEY),
        storage.remove(USER_ID_KEY),
        storage.remove(USER_ROLE_KEY),
    ];
    results.into_iter().collect()
}

/// In-memory storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
