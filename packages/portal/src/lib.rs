//! # Campus portal core
//!
//! Identity, session gating, role views and the local user directory for the
//! campus portal, plus the small persisted collections the admin pages edit.
//! Everything sits on a [`KeyValueStore`], so the same code runs against
//! browser storage, files on disk, or memory in tests.
//!
//! [`Portal`] wires the parts to one store and one [`PortalConfig`].

pub mod access;
pub mod admin_logs;
pub mod auth;
pub mod catalog;
pub mod directory;
pub mod error;
pub mod events;
pub mod identity;
pub mod models;
pub mod settings;

pub use access::{select_view, DashboardView, NavIcon, NavItem, RoleView};
pub use admin_logs::{LogBook, LogEntry, LogLevel};
pub use auth::{Authenticator, SignupForm};
pub use directory::{generate_email, Directory, UserDraft};
pub use error::{PortalError, Result};
pub use events::EventBoard;
pub use identity::{IdentityStore, Session, SessionGate};
pub use settings::{SettingsStore, SiteSettings};

use store::{KeyValueStore, MigrationReport, PortalConfig, StorageKeys};

/// What the session gate and the stored user record say together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateState {
    /// No token: protected views are closed.
    Closed,
    /// Token and a readable user record.
    Active(Session),
    /// Token present but the user record is missing or does not parse.
    /// `role_tag` is the raw stored role, if one could be read.
    Unreadable { role_tag: Option<String> },
}

impl GateState {
    /// The dashboard to show for an unreadable record: an unknown role tag
    /// gives [`DashboardView::InvalidRole`], anything else `None`.
    pub fn invalid_role(&self) -> Option<DashboardView> {
        match self {
            GateState::Unreadable {
                role_tag: Some(tag),
            } => match access::select_view_for_tag(tag).dashboard {
                invalid @ DashboardView::InvalidRole(_) => Some(invalid),
                _ => None,
            },
            _ => None,
        }
    }
}

/// All portal services over one store.
#[derive(Clone, Debug)]
pub struct Portal<S> {
    store: S,
    keys: StorageKeys,
    config: PortalConfig,
}

impl<S: KeyValueStore + Clone> Portal<S> {
    /// Wire the services to `store` without touching it. Call
    /// [`Portal::prepare`] before use, or use [`Portal::open`].
    pub fn new(store: S, config: PortalConfig) -> Self {
        let keys = config.storage_keys();
        Self { store, keys, config }
    }

    /// [`Portal::new`] followed by [`Portal::prepare`].
    pub fn open(store: S, config: PortalConfig) -> Result<Self> {
        let portal = Self::new(store, config);
        portal.prepare()?;
        Ok(portal)
    }

    /// Migrate the store to the current layout, then seed the demo accounts
    /// when the configuration asks for them and the directory is empty.
    pub fn prepare(&self) -> Result<MigrationReport> {
        let report = store::migrate(&self.store, &self.keys)?;
        log_migration(&report);

        if self.config.directory.seed_demo_users {
            let demo = auth::demo_users(&self.config.directory.email_domain);
            self.directory().seed_if_empty(&demo)?;
        }
        Ok(report)
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn directory(&self) -> Directory<S> {
        Directory::new(
            self.store.clone(),
            &self.keys,
            self.config.directory.email_domain.clone(),
        )
    }

    pub fn identity(&self) -> IdentityStore<S> {
        IdentityStore::new(self.store.clone(), &self.keys, self.directory())
    }

    pub fn gate(&self) -> SessionGate<S> {
        SessionGate::new(self.store.clone(), &self.keys)
    }

    pub fn auth(&self) -> Authenticator<S> {
        Authenticator::new(self.directory(), self.identity(), self.config.admin.clone())
    }

    pub fn events(&self) -> EventBoard<S> {
        EventBoard::new(self.store.clone(), &self.keys)
    }

    pub fn logs(&self) -> LogBook<S> {
        LogBook::new(self.store.clone(), &self.keys)
    }

    pub fn settings(&self) -> SettingsStore<S> {
        SettingsStore::new(self.store.clone(), &self.keys)
    }

    /// The current session, when the gate is open and a user record is stored.
    ///
    /// A token without a readable user record is not a session.
    pub fn session(&self) -> Option<Session> {
        let identity = self.identity();
        if !self.gate().is_authenticated() {
            return None;
        }
        let token = identity.token()?;
        let user = identity.current()?;
        Some(Session { user, token })
    }

    /// Classify the stored session for routing.
    pub fn gate_state(&self) -> GateState {
        if !self.gate().is_authenticated() {
            return GateState::Closed;
        }
        match self.session() {
            Some(session) => GateState::Active(session),
            None => {
                let role_tag = self.identity().stored_role_tag();
                tracing::warn!(role = ?role_tag, "token present but user record unreadable");
                GateState::Unreadable { role_tag }
            }
        }
    }
}

fn log_migration(report: &MigrationReport) {
    if report.newer_schema {
        tracing::warn!(
            from = ?report.from_version,
            "stored data uses a newer schema; reading it as-is"
        );
    }
    if !report.moved.is_empty() || !report.discarded.is_empty() {
        tracing::info!(
            moved = report.moved.len(),
            discarded = report.discarded.len(),
            "migrated legacy storage keys"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use store::MemoryStore;

    fn portal() -> Portal<MemoryStore> {
        Portal::open(MemoryStore::new(), PortalConfig::default()).unwrap()
    }

    #[test]
    fn test_open_seeds_demo_users_once() {
        let store = MemoryStore::new();
        let portal = Portal::open(store.clone(), PortalConfig::default()).unwrap();
        assert_eq!(portal.directory().all().len(), 3);

        portal.directory().delete(&portal.directory().all()[0].id).unwrap();
        let reopened = Portal::open(store, PortalConfig::default()).unwrap();
        assert_eq!(reopened.directory().all().len(), 2);
    }

    #[test]
    fn test_open_without_demo_users() {
        let config = PortalConfig::default().with_demo_users(false);
        let portal = Portal::open(MemoryStore::new(), config).unwrap();
        assert!(portal.directory().all().is_empty());
    }

    #[test]
    fn test_open_migrates_legacy_user() {
        let store = MemoryStore::new();
        let user = auth::demo_users("campus.edu").remove(0);
        store
            .set("campus-app-user", &serde_json::to_string(&user).unwrap())
            .unwrap();
        store.set("campus-app-auth-token", "demo-token-1").unwrap();

        let portal = Portal::open(store.clone(), PortalConfig::default()).unwrap();
        let session = portal.session().unwrap();
        assert_eq!(session.user, user);
        assert!(store.get("campus-app-user").is_none());
    }

    #[test]
    fn test_session_follows_login_and_logout() {
        let portal = portal();
        assert!(portal.session().is_none());

        portal.auth().login("sarah johnson", "2023FAC001").unwrap();
        let session = portal.session().unwrap();
        assert_eq!(session.role(), Role::Faculty);
        assert_eq!(session.view().dashboard, DashboardView::Faculty);

        portal.auth().logout();
        assert!(portal.session().is_none());
        assert!(!portal.gate().is_authenticated());
    }

    #[test]
    fn test_token_without_user_is_not_a_session() {
        let portal = portal();
        let token_key = portal.keys().key(store::Collection::Token);
        portal.store.set(&token_key, "demo-token-x").unwrap();

        assert!(portal.gate().is_authenticated());
        assert!(portal.session().is_none());
        assert_eq!(portal.gate_state(), GateState::Unreadable { role_tag: None });
    }

    #[test]
    fn test_gate_state_follows_login() {
        let portal = portal();
        assert_eq!(portal.gate_state(), GateState::Closed);

        portal.auth().login("Mike Davis", "2023STF001").unwrap();
        match portal.gate_state() {
            GateState::Active(session) => assert_eq!(session.role(), Role::Staff),
            other => panic!("expected an active session, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_role_with_token_shows_invalid_role_until_logout() {
        let portal = portal();
        let keys = portal.keys().clone();
        portal
            .store
            .set(
                &keys.key(store::Collection::User),
                r#"{"id":"9","name":"Dean Who","email":"","rollNumber":"D-9","role":"dean"}"#,
            )
            .unwrap();
        portal.store.set(&keys.key(store::Collection::Token), "demo-token-9").unwrap();

        let state = portal.gate_state();
        assert_eq!(
            state,
            GateState::Unreadable {
                role_tag: Some("dean".to_string())
            }
        );
        assert_eq!(
            state.invalid_role(),
            Some(DashboardView::InvalidRole("dean".to_string()))
        );

        // Logging out is the way back to the login page
        portal.auth().logout();
        assert_eq!(portal.gate_state(), GateState::Closed);
    }

    #[test]
    fn test_malformed_user_with_token_is_unreadable_without_role() {
        let portal = portal();
        let keys = portal.keys().clone();
        portal.store.set(&keys.key(store::Collection::User), "{\"id\": ").unwrap();
        portal.store.set(&keys.key(store::Collection::Token), "demo-token-1").unwrap();

        let state = portal.gate_state();
        assert_eq!(state, GateState::Unreadable { role_tag: None });
        assert_eq!(state.invalid_role(), None);
    }
}
