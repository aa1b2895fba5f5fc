//! # Identity store and session gate
//!
//! [`IdentityStore`] persists the logged-in user and a token derived from the
//! user's id. [`SessionGate`] answers "is anyone logged in?" by checking for a
//! non-empty token, and nothing more: it does not tie the token to the stored
//! record, and anyone able to edit the browser's storage can open it.
//!
//! Views do not reach for a global current user. They receive a [`Session`]
//! built from both halves (see [`Portal::session`](crate::Portal::session)).

use store::json::{read_json, write_json};
use store::{Collection, KeyValueStore, StorageKeys};

use crate::access::{select_view, RoleView};
use crate::directory::Directory;
use crate::error::Result;
use crate::models::{Role, User};

const TOKEN_PREFIX: &str = "demo-token-";

/// Token stored alongside `user`.
pub fn session_token(user: &User) -> String {
    format!("{TOKEN_PREFIX}{}", user.id)
}

/// Persisted representation of the logged-in user.
#[derive(Clone, Debug)]
pub struct IdentityStore<S> {
    store: S,
    user_key: String,
    token_key: String,
    directory: Directory<S>,
}

impl<S: KeyValueStore> IdentityStore<S> {
    pub fn new(store: S, keys: &StorageKeys, directory: Directory<S>) -> Self {
        Self {
            store,
            user_key: keys.key(Collection::User),
            token_key: keys.key(Collection::Token),
            directory,
        }
    }

    /// Store `user` and its token, then add it to the directory if its id is new.
    ///
    /// The three writes are independent; an error part-way leaves the earlier
    /// ones in place.
    pub fn save(&self, user: &User) -> Result<()> {
        write_json(&self.store, &self.user_key, user)?;
        self.store.set(&self.token_key, &session_token(user))?;
        if self.directory.merge_if_absent(user)? {
            tracing::debug!(id = %user.id, "identity merged into directory");
        }
        Ok(())
    }

    /// The stored user. Missing and malformed records both read as `None`.
    pub fn current(&self) -> Option<User> {
        read_json(&self.store, &self.user_key)
    }

    /// The raw `role` field of the stored record, even when the record does
    /// not parse as a [`User`]. `None` when absent or not valid JSON.
    pub fn stored_role_tag(&self) -> Option<String> {
        let raw = self.store.get(&self.user_key)?;
        let value: serde_json::Value = serde_json::from_str(&raw).ok()?;
        value.get("role")?.as_str().map(str::to_string)
    }

    /// The stored token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(&self.token_key)
    }

    /// Remove the user record and the token.
    pub fn clear(&self) {
        self.store.remove(&self.user_key);
        self.store.remove(&self.token_key);
    }
}

/// Presence check guarding protected views.
#[derive(Clone, Debug)]
pub struct SessionGate<S> {
    store: S,
    token_key: String,
}

impl<S: KeyValueStore> SessionGate<S> {
    pub fn new(store: S, keys: &StorageKeys) -> Self {
        Self {
            store,
            token_key: keys.key(Collection::Token),
        }
    }

    /// True iff the token key holds a non-empty string.
    pub fn is_authenticated(&self) -> bool {
        self.store
            .get(&self.token_key)
            .is_some_and(|token| !token.is_empty())
    }
}

/// The logged-in user and token, passed explicitly to views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role()
    }

    /// Dashboard and navigation for this session's role.
    pub fn view(&self) -> RoleView {
        select_view(self.role())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Affiliation, Major};
    use store::MemoryStore;

    fn identity(store: &MemoryStore) -> (IdentityStore<MemoryStore>, SessionGate<MemoryStore>) {
        let keys = StorageKeys::default();
        let directory = Directory::new(store.clone(), &keys, "campus.edu");
        (
            IdentityStore::new(store.clone(), &keys, directory),
            SessionGate::new(store.clone(), &keys),
        )
    }

    fn student() -> User {
        User {
            id: "1".into(),
            name: "John Smith".into(),
            email: "john.smith2023cs001@campus.edu".into(),
            roll_number: "2023CS001".into(),
            affiliation: Affiliation::Student {
                major: Some(Major::ComputerScience),
            },
            created_at: None,
        }
    }

    #[test]
    fn test_save_then_current_returns_same_user() {
        let store = MemoryStore::new();
        let (identity, _) = identity(&store);

        let user = student();
        identity.save(&user).unwrap();
        assert_eq!(identity.current(), Some(user.clone()));
        assert_eq!(identity.token().as_deref(), Some("demo-token-1"));

        let mut dated = user;
        dated.id = "2".into();
        dated.created_at = Some(chrono::Utc::now());
        identity.save(&dated).unwrap();
        assert_eq!(identity.current(), Some(dated));
    }

    #[test]
    fn test_gate_follows_save_and_clear() {
        let store = MemoryStore::new();
        let (identity, gate) = identity(&store);
        assert!(!gate.is_authenticated());

        identity.save(&student()).unwrap();
        assert!(gate.is_authenticated());

        identity.clear();
        assert!(!gate.is_authenticated());
        assert!(identity.current().is_none());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let store = MemoryStore::new();
        let (_, gate) = identity(&store);
        store
            .set(&StorageKeys::default().key(Collection::Token), "")
            .unwrap();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_malformed_user_record_reads_as_none() {
        let store = MemoryStore::new();
        let (identity, gate) = identity(&store);
        let keys = StorageKeys::default();
        store.set(&keys.key(Collection::User), "{\"id\": ").unwrap();
        store.set(&keys.key(Collection::Token), "demo-token-1").unwrap();

        assert!(identity.current().is_none());
        // The gate only looks at the token
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_stored_role_tag_survives_unknown_role() {
        let store = MemoryStore::new();
        let (identity, _) = identity(&store);
        let keys = StorageKeys::default();
        store
            .set(&keys.key(Collection::User), r#"{"id":"9","name":"X","role":"dean"}"#)
            .unwrap();

        assert!(identity.current().is_none());
        assert_eq!(identity.stored_role_tag().as_deref(), Some("dean"));

        store.set(&keys.key(Collection::User), "{\"id\": ").unwrap();
        assert!(identity.stored_role_tag().is_none());
    }

    #[test]
    fn test_save_merges_into_directory_once() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        let directory = Directory::new(store.clone(), &keys, "campus.edu");
        let identity = IdentityStore::new(store.clone(), &keys, directory.clone());

        identity.save(&student()).unwrap();
        identity.save(&student()).unwrap();
        assert_eq!(directory.all(), vec![student()]);

        // Clearing the session leaves the directory alone
        identity.clear();
        assert_eq!(directory.all().len(), 1);
    }
}
