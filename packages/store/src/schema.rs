//! # Storage schema: versioned keys and legacy migration
//!
//! Earlier builds of the portal wrote each collection under its own ad hoc key
//! (`campus-app-user`, `admin-users`, ...). The current layout puts every
//! collection under one namespace and schema version:
//!
//! ```text
//! <namespace>.schema          -> "1"
//! <namespace>.v1.user         -> JSON user record
//! <namespace>.v1.token        -> session token string
//! <namespace>.v1.directory    -> JSON array of users
//! <namespace>.v1.events       -> JSON array of events
//! <namespace>.v1.logs         -> JSON array of log entries
//! <namespace>.v1.settings     -> JSON site settings object
//! ```
//!
//! [`migrate`] moves values from the legacy keys into this layout once, then
//! stamps the `.schema` marker so later starts skip the work.

use crate::error::Result;
use crate::kv::KeyValueStore;

/// Current storage layout version.
pub const SCHEMA_VERSION: u32 = 1;

/// Default key namespace.
pub const DEFAULT_NAMESPACE: &str = "campus-portal";

/// A persisted collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    User,
    Token,
    Directory,
    Events,
    Logs,
    Settings,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::User,
        Collection::Token,
        Collection::Directory,
        Collection::Events,
        Collection::Logs,
        Collection::Settings,
    ];

    fn segment(self) -> &'static str {
        match self {
            Collection::User => "user",
            Collection::Token => "token",
            Collection::Directory => "directory",
            Collection::Events => "events",
            Collection::Logs => "logs",
            Collection::Settings => "settings",
        }
    }

    /// Keys earlier builds used for this collection.
    pub fn legacy_keys(self) -> &'static [&'static str] {
        match self {
            Collection::User => &["campus-app-user"],
            Collection::Token => &["campus-app-auth-token"],
            Collection::Directory => &["admin-users"],
            Collection::Events => &[],
            Collection::Logs => &["admin-logs"],
            Collection::Settings => &["admin-settings"],
        }
    }
}

/// Resolves collection names to concrete storage keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    namespace: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl StorageKeys {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Versioned key for a collection, e.g. `campus-portal.v1.user`.
    pub fn key(&self, collection: Collection) -> String {
        format!(
            "{}.v{}.{}",
            self.namespace,
            SCHEMA_VERSION,
            collection.segment()
        )
    }

    /// Key holding the schema version marker.
    pub fn schema_marker(&self) -> String {
        format!("{}.schema", self.namespace)
    }
}

/// Outcome of a [`migrate`] run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Version found in the marker before migrating (`None` when absent).
    pub from_version: Option<u32>,
    /// Legacy keys whose values were moved into the versioned layout.
    pub moved: Vec<String>,
    /// Legacy keys dropped because the versioned key already had a value.
    pub discarded: Vec<String>,
    /// The stored marker is newer than this build understands.
    pub newer_schema: bool,
}

/// Bring `store` up to [`SCHEMA_VERSION`].
///
/// A legacy value is copied only into an empty versioned key; the legacy key is
/// removed either way. Nothing is touched when the marker is already current or
/// newer than this build.
pub fn migrate<S>(store: &S, keys: &StorageKeys) -> Result<MigrationReport>
where
    S: KeyValueStore + ?Sized,
{
    let marker = keys.schema_marker();
    let from_version = store
        .get(&marker)
        .and_then(|raw| raw.trim().parse::<u32>().ok());

    let mut report = MigrationReport {
        from_version,
        ..Default::default()
    };

    match from_version {
        Some(v) if v == SCHEMA_VERSION => return Ok(report),
        Some(v) if v > SCHEMA_VERSION => {
            tracing::warn!(
                stored = v,
                supported = SCHEMA_VERSION,
                "storage schema is newer than this build, leaving it untouched"
            );
            report.newer_schema = true;
            return Ok(report);
        }
        _ => {}
    }

    for collection in Collection::ALL {
        let target = keys.key(collection);
        for legacy in collection.legacy_keys() {
            let Some(value) = store.get(legacy) else {
                continue;
            };
            if store.contains(&target) {
                report.discarded.push(legacy.to_string());
            } else {
                store.set(&target, &value)?;
                report.moved.push(legacy.to_string());
            }
            store.remove(legacy);
        }
    }

    store.set(&marker, &SCHEMA_VERSION.to_string())?;
    tracing::info!(
        from = ?from_version,
        to = SCHEMA_VERSION,
        moved = report.moved.len(),
        discarded = report.discarded.len(),
        "storage schema migrated"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_versioned_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.key(Collection::User), "campus-portal.v1.user");
        assert_eq!(keys.key(Collection::Directory), "campus-portal.v1.directory");
        assert_eq!(keys.schema_marker(), "campus-portal.schema");

        let custom = StorageKeys::new("test");
        assert_eq!(custom.key(Collection::Token), "test.v1.token");
    }

    #[test]
    fn test_migrate_moves_legacy_keys() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        store.set("campus-app-user", "{\"id\":\"1\"}").unwrap();
        store.set("campus-app-auth-token", "demo-token-1").unwrap();
        store.set("admin-users", "[]").unwrap();

        let report = migrate(&store, &keys).unwrap();
        assert_eq!(report.from_version, None);
        assert_eq!(report.moved.len(), 3);
        assert!(!report.newer_schema);

        assert_eq!(
            store.get(&keys.key(Collection::User)).as_deref(),
            Some("{\"id\":\"1\"}")
        );
        assert_eq!(
            store.get(&keys.key(Collection::Token)).as_deref(),
            Some("demo-token-1")
        );
        assert!(store.get("campus-app-user").is_none());
        assert!(store.get("admin-users").is_none());
        assert_eq!(store.get(&keys.schema_marker()).as_deref(), Some("1"));
    }

    #[test]
    fn test_migrate_keeps_existing_versioned_value() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        store.set(&keys.key(Collection::Settings), "{\"new\":true}").unwrap();
        store.set("admin-settings", "{\"old\":true}").unwrap();

        let report = migrate(&store, &keys).unwrap();
        assert_eq!(report.discarded, vec!["admin-settings".to_string()]);
        assert_eq!(
            store.get(&keys.key(Collection::Settings)).as_deref(),
            Some("{\"new\":true}")
        );
        assert!(store.get("admin-settings").is_none());
    }

    #[test]
    fn test_migrate_is_noop_when_current() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        migrate(&store, &keys).unwrap();

        // A legacy key written after migration is left alone
        store.set("admin-logs", "[]").unwrap();
        let report = migrate(&store, &keys).unwrap();
        assert_eq!(report.from_version, Some(SCHEMA_VERSION));
        assert!(report.moved.is_empty());
        assert!(store.get("admin-logs").is_some());
    }

    #[test]
    fn test_migrate_leaves_newer_schema_alone() {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        store.set(&keys.schema_marker(), "7").unwrap();
        store.set("campus-app-user", "{}").unwrap();

        let report = migrate(&store, &keys).unwrap();
        assert!(report.newer_schema);
        assert!(store.get("campus-app-user").is_some());
        assert_eq!(store.get(&keys.schema_marker()).as_deref(), Some("7"));
    }
}
