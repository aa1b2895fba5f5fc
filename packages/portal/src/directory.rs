//! # Local directory of every known account
//!
//! The directory is the authoritative list of users. The identity store's
//! current-user record is a snapshot of one directory entry, merged back in on
//! every [`IdentityStore::save`](crate::IdentityStore::save).
//!
//! Reads are lenient: each stored object becomes a [`User`] with missing or
//! ill-typed fields coerced to an empty string, an unknown role to
//! [`Role::Student`] and an unknown major/department/staff type to `None`.
//! Writes rewrite the whole collection.
//!
//! Email addresses are derived, never typed in. [`generate_email`] lower-cases
//! the name, keeps the first and last word joined by a dot, and appends the
//! lower-cased roll number and the domain. Uniqueness is a linear scan at write
//! time; a collision rejects the write rather than disambiguating it.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use store::json::write_json;
use store::{Collection, KeyValueStore, StorageKeys};
use uuid::Uuid;

use crate::error::{PortalError, Result};
use crate::models::{Affiliation, Department, Major, Role, StaffType, User};

/// Minimum display-name length accepted by the user forms.
const MIN_NAME_LEN: usize = 2;

/// Derive the campus email for `name` and `roll_number`.
///
/// `("Jane Doe", "2023CS002", "campus.edu")` gives
/// `"jane.doe2023cs002@campus.edu"`; a single-word name has no dot.
pub fn generate_email(name: &str, roll_number: &str, domain: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let parts: Vec<&str> = lowered.split_whitespace().collect();

    let mut prefix = parts.first().copied().unwrap_or_default().to_string();
    if parts.len() > 1 {
        if let Some(last) = parts.last() {
            prefix.push('.');
            prefix.push_str(last);
        }
    }

    format!(
        "{prefix}{}@{domain}",
        roll_number.trim().to_lowercase()
    )
}

/// Fields an administrator (or a signup form) provides for an account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub roll_number: String,
    pub affiliation: Affiliation,
}

impl UserDraft {
    pub fn new(
        name: impl Into<String>,
        roll_number: impl Into<String>,
        affiliation: Affiliation,
    ) -> Self {
        Self {
            name: name.into(),
            roll_number: roll_number.into(),
            affiliation,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            return Err(PortalError::validation(
                "Name must be at least 2 characters",
            ));
        }
        if self.roll_number.trim().is_empty() {
            return Err(PortalError::validation("Roll number is required"));
        }
        Ok(())
    }
}

/// Storage-backed collection of all users.
#[derive(Clone, Debug)]
pub struct Directory<S> {
    store: S,
    key: String,
    email_domain: String,
}

impl<S: KeyValueStore> Directory<S> {
    pub fn new(store: S, keys: &StorageKeys, email_domain: impl Into<String>) -> Self {
        Self {
            store,
            key: keys.key(Collection::Directory),
            email_domain: email_domain.into(),
        }
    }

    pub fn email_domain(&self) -> &str {
        &self.email_domain
    }

    /// [`generate_email`] with this directory's domain.
    pub fn generate_email(&self, name: &str, roll_number: &str) -> String {
        generate_email(name, roll_number, &self.email_domain)
    }

    /// Every stored user, in insertion order.
    pub fn all(&self) -> Vec<User> {
        let Some(raw) = self.store.get(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items.iter().filter_map(user_from_value).collect(),
            Ok(_) => {
                tracing::warn!(key = %self.key, "directory is not a JSON array, ignoring it");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding malformed directory");
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.all().into_iter().find(|u| u.id == id)
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.all().into_iter().find(|u| u.email == email)
    }

    /// Whether no user other than `except_id` already has `email`.
    pub fn is_email_unique(&self, email: &str, except_id: Option<&str>) -> bool {
        email_unique_in(&self.all(), email, except_id)
    }

    /// Create a user from `draft`, rejecting a duplicate generated email.
    pub fn add(&self, draft: &UserDraft) -> Result<User> {
        draft.validate()?;
        let mut users = self.all();
        let email = self.generate_email(&draft.name, &draft.roll_number);
        if !email_unique_in(&users, &email, None) {
            return Err(PortalError::EmailTaken(email));
        }

        let user = User {
            id: new_user_id(),
            name: draft.name.trim().to_string(),
            email,
            roll_number: draft.roll_number.trim().to_string(),
            affiliation: draft.affiliation.clone(),
            created_at: Some(Utc::now()),
        };
        users.push(user.clone());
        self.flush(&users)?;
        tracing::info!(id = %user.id, email = %user.email, "user added");
        Ok(user)
    }

    /// Apply `draft` to the user with `id`. The email is regenerated; the
    /// uniqueness check only runs when it changes.
    pub fn update(&self, id: &str, draft: &UserDraft) -> Result<User> {
        draft.validate()?;
        let mut users = self.all();
        let Some(index) = users.iter().position(|u| u.id == id) else {
            return Err(PortalError::UnknownUser(id.to_string()));
        };

        let email = self.generate_email(&draft.name, &draft.roll_number);
        if email != users[index].email && !email_unique_in(&users, &email, Some(id)) {
            return Err(PortalError::EmailTaken(email));
        }

        let user = &mut users[index];
        user.name = draft.name.trim().to_string();
        user.roll_number = draft.roll_number.trim().to_string();
        user.email = email;
        user.affiliation = draft.affiliation.clone();
        let updated = user.clone();

        self.flush(&users)?;
        tracing::info!(id, "user updated");
        Ok(updated)
    }

    /// Replace the user with the same id, or append it.
    pub fn upsert(&self, user: User) -> Result<()> {
        let mut users = self.all();
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user,
            None => users.push(user),
        }
        self.flush(&users)
    }

    /// Append `user` unless a record with its id exists. Returns whether it was added.
    pub fn merge_if_absent(&self, user: &User) -> Result<bool> {
        let mut users = self.all();
        if users.iter().any(|u| u.id == user.id) {
            return Ok(false);
        }
        users.push(user.clone());
        self.flush(&users)?;
        Ok(true)
    }

    /// Remove the user with `id`. Returns whether a record was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut users = self.all();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Ok(false);
        }
        self.flush(&users)?;
        tracing::info!(id, "user deleted");
        Ok(true)
    }

    /// Store `users` when the directory holds nothing yet.
    pub fn seed_if_empty(&self, users: &[User]) -> Result<bool> {
        if !self.all().is_empty() {
            return Ok(false);
        }
        self.flush(users)?;
        tracing::debug!(count = users.len(), "directory seeded");
        Ok(true)
    }

    fn flush(&self, users: &[User]) -> Result<()> {
        write_json(&self.store, &self.key, users)?;
        Ok(())
    }
}

fn email_unique_in(users: &[User], email: &str, except_id: Option<&str>) -> bool {
    !users
        .iter()
        .any(|u| u.email == email && Some(u.id.as_str()) != except_id)
}

fn new_user_id() -> String {
    format!("user-{}", Uuid::new_v4().simple())
}

/// Coerce one stored entry into a [`User`]. Non-objects are skipped.
fn user_from_value(value: &Value) -> Option<User> {
    let obj = value.as_object()?;

    let role = tag(obj, "role").and_then(Role::parse).unwrap_or_default();
    let affiliation = match role {
        Role::Student => Affiliation::Student {
            major: tag(obj, "major").and_then(Major::parse),
        },
        Role::Faculty => Affiliation::Faculty {
            department: tag(obj, "department").and_then(Department::parse),
        },
        Role::Staff => Affiliation::Staff {
            staff_type: tag(obj, "staffType").and_then(StaffType::parse),
        },
        Role::Admin => Affiliation::Admin,
    };

    Some(User {
        id: text(obj, "id"),
        name: text(obj, "name"),
        email: text(obj, "email"),
        roll_number: text(obj, "rollNumber"),
        affiliation,
        created_at: tag(obj, "createdAt")
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc)),
    })
}

fn tag<'a>(obj: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    obj.get(field).and_then(Value::as_str)
}

fn text(obj: &Map<String, Value>, field: &str) -> String {
    tag(obj, field).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn directory() -> Directory<MemoryStore> {
        Directory::new(MemoryStore::new(), &StorageKeys::default(), "campus.edu")
    }

    fn faculty(name: &str, roll: &str) -> UserDraft {
        UserDraft::new(
            name,
            roll,
            Affiliation::Faculty {
                department: Some(Department::Mathematics),
            },
        )
    }

    #[test]
    fn test_generate_email() {
        assert_eq!(
            generate_email("Jane Doe", "2023CS002", "campus.edu"),
            "jane.doe2023cs002@campus.edu"
        );
        // Middle names are dropped
        assert_eq!(
            generate_email("  Mary Ann   Evans ", "X1", "campus.edu"),
            "mary.evansx1@campus.edu"
        );
        // Single word has no dot
        assert_eq!(generate_email("Plato", "P1", "campus.edu"), "platop1@campus.edu");
    }

    #[test]
    fn test_add_and_list() {
        let dir = directory();
        let user = dir.add(&faculty("Jane Doe", "2023CS002")).unwrap();

        assert!(user.id.starts_with("user-"));
        assert_eq!(user.email, "jane.doe2023cs002@campus.edu");
        assert!(user.created_at.is_some());

        let all = dir.all();
        assert_eq!(all, vec![user.clone()]);
        assert_eq!(dir.get(&user.id), Some(user.clone()));
        assert_eq!(dir.find_by_email(&user.email), Some(user));
    }

    #[test]
    fn test_add_rejects_duplicate_email_and_leaves_directory_unchanged() {
        let dir = directory();
        dir.add(&faculty("Jane Doe", "2023CS002")).unwrap();
        let before = dir.all();

        // Different middle name, same generated address
        let err = dir.add(&faculty("Jane Q Doe", "2023cs002")).unwrap_err();
        assert!(matches!(
            err,
            PortalError::EmailTaken(ref e) if e == "jane.doe2023cs002@campus.edu"
        ));
        assert_eq!(dir.all(), before);
    }

    #[test]
    fn test_add_validates_draft() {
        let dir = directory();
        assert!(matches!(
            dir.add(&faculty("J", "1")),
            Err(PortalError::Validation(_))
        ));
        assert!(matches!(
            dir.add(&faculty("Jane Doe", "  ")),
            Err(PortalError::Validation(_))
        ));
        assert!(dir.all().is_empty());
    }

    #[test]
    fn test_update() {
        let dir = directory();
        let jane = dir.add(&faculty("Jane Doe", "2023CS002")).unwrap();
        let john = dir.add(&faculty("John Roe", "2023CS003")).unwrap();

        // Unchanged name and roll keeps its own email
        let same = dir.update(&jane.id, &faculty("Jane Doe", "2023CS002")).unwrap();
        assert_eq!(same.email, jane.email);

        // Renaming into John's address is rejected
        let err = dir.update(&jane.id, &faculty("John Roe", "2023CS003")).unwrap_err();
        assert!(matches!(err, PortalError::EmailTaken(_)));
        assert_eq!(dir.get(&jane.id).unwrap().name, "Jane Doe");

        let moved = dir
            .update(
                &john.id,
                &UserDraft::new("John Roe", "2024ST001", Affiliation::Staff { staff_type: None }),
            )
            .unwrap();
        assert_eq!(moved.email, "john.roe2024st001@campus.edu");
        assert_eq!(moved.role(), Role::Staff);
        assert_eq!(dir.get(&john.id), Some(moved));

        assert!(matches!(
            dir.update("missing", &faculty("Some One", "1")),
            Err(PortalError::UnknownUser(_))
        ));
    }

    #[test]
    fn test_delete_upsert_merge() {
        let dir = directory();
        let jane = dir.add(&faculty("Jane Doe", "2023CS002")).unwrap();

        assert!(!dir.merge_if_absent(&jane).unwrap());

        let mut renamed = jane.clone();
        renamed.name = "Jane D".into();
        dir.upsert(renamed.clone()).unwrap();
        assert_eq!(dir.all(), vec![renamed]);

        assert!(dir.delete(&jane.id).unwrap());
        assert!(!dir.delete(&jane.id).unwrap());
        assert!(dir.all().is_empty());
    }

    #[test]
    fn test_lenient_read_coerces_missing_fields() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        store
            .set(
                &keys.key(Collection::Directory),
                r#"[
                    {"id": "a", "name": "No Role"},
                    {"id": "b", "name": 42, "role": "dean", "major": "Alchemy"},
                    {"id": "c", "role": "faculty", "department": "Physics", "createdAt": "2025-04-01T10:00:00Z"},
                    "not an object"
                ]"#,
            )
            .unwrap();
        let dir = Directory::new(store, &keys, "campus.edu");

        let users = dir.all();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].role(), Role::Student);
        assert_eq!(users[0].email, "");
        assert_eq!(users[1].name, "");
        assert_eq!(users[1].affiliation, Affiliation::Student { major: None });
        assert_eq!(
            users[2].affiliation,
            Affiliation::Faculty {
                department: Some(Department::Physics)
            }
        );
        assert!(users[2].created_at.is_some());
    }

    #[test]
    fn test_malformed_directory_reads_empty() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        store.set(&keys.key(Collection::Directory), "{oops").unwrap();
        let dir = Directory::new(store, &keys, "campus.edu");
        assert!(dir.all().is_empty());
    }

    #[test]
    fn test_seed_if_empty() {
        let dir = directory();
        let seeded = dir.add(&faculty("Jane Doe", "1")).unwrap();
        assert!(!dir.seed_if_empty(&[]).unwrap());
        assert_eq!(dir.all(), vec![seeded]);

        let fresh = directory();
        let users = vec![User {
            id: "1".into(),
            name: "Demo".into(),
            email: "demo1@campus.edu".into(),
            roll_number: "1".into(),
            affiliation: Affiliation::Admin,
            created_at: None,
        }];
        assert!(fresh.seed_if_empty(&users).unwrap());
        assert_eq!(fresh.all(), users);
    }
}
