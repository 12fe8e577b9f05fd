// ============================================================================
// SESSION STORE - token / role / username persisted in key-value storage
// ============================================================================

use crate::error::StorageError;
use crate::models::{Role, Session};
use crate::utils::{
    BrowserStorage, KeyValueStore, STORAGE_KEY_ROLE, STORAGE_KEY_TOKEN, STORAGE_KEY_USERNAME,
};

/// Pass-through over three storage entries. No validation is done here; the
/// role is parsed on read and anything unrecognised reads as `None`.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S = BrowserStorage> {
    backend: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn set(&self, token: &str, role: &str, username: &str) -> Result<(), StorageError> {
        let written = self
            .backend
            .set_item(STORAGE_KEY_TOKEN, token)
            .and_then(|_| self.backend.set_item(STORAGE_KEY_ROLE, role))
            .and_then(|_| self.backend.set_item(STORAGE_KEY_USERNAME, username));

        if written.is_err() {
            // Never leave a half-written session behind
            let _ = self.clear();
        }
        written
    }

    /// Removes all three entries, reporting the first failure
    pub fn clear(&self) -> Result<(), StorageError> {
        let results = [
            self.backend.remove_item(STORAGE_KEY_TOKEN),
            self.backend.remove_item(STORAGE_KEY_ROLE),
            self.backend.remove_item(STORAGE_KEY_USERNAME),
        ];
        results.into_iter().collect::<Result<Vec<_>, _>>().map(|_| ())
    }

    pub fn get(&self) -> Session {
        Session {
            token: self.backend.get_item(STORAGE_KEY_TOKEN),
            role: self
                .backend
                .get_item(STORAGE_KEY_ROLE)
                .as_deref()
                .and_then(Role::parse),
            username: self.backend.get_item(STORAGE_KEY_USERNAME),
        }
    }
}
