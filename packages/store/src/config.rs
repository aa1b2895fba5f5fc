//! # Portal configuration (`portal.toml`)
//!
//! Defines the TOML configuration the portal is started with
//! (filename: [`PortalConfig::filename`] = `"portal.toml"`). The web build
//! embeds the file at compile time; native builds may read it from disk.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! namespace = "campus-portal"     # prefix of every storage key
//!
//! [directory]
//! email_domain = "campus.edu"     # suffix of generated addresses
//! seed_demo_users = true          # populate demo accounts on first run
//!
//! [admin]
//! email = "admin@campus.edu"
//! password = "1234"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`PortalConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`StorageConfig`] | Key namespace, see [`PortalConfig::storage_keys`]. |
//! | [`DirectoryConfig`] | Email domain and demo-account seeding. |
//! | [`AdminConfig`] | The built-in administrator login, a plaintext demo credential. |
//!
//! Every section derives or implements `Default`, so a missing or empty file is
//! the default configuration.

use serde::{Deserialize, Serialize};

use crate::schema::{StorageKeys, DEFAULT_NAMESPACE};

/// Top-level configuration stored in `portal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub admin: AdminConfig,
}

/// Storage configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Prefix shared by every storage key.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

/// User directory configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Domain appended to generated email addresses.
    #[serde(default = "default_email_domain")]
    pub email_domain: String,
    /// Seed the demo accounts when the directory is empty.
    #[serde(default = "default_seed_demo_users")]
    pub seed_demo_users: bool,
}

fn default_email_domain() -> String {
    "campus.edu".to_string()
}

fn default_seed_demo_users() -> bool {
    true
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            email_domain: default_email_domain(),
            seed_demo_users: default_seed_demo_users(),
        }
    }
}

/// Built-in administrator credentials.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_email")]
    pub email: String,
    #[serde(default = "default_admin_password")]
    pub password: String,
}

fn default_admin_email() -> String {
    "admin@campus.edu".to_string()
}

fn default_admin_password() -> String {
    "1234".to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: default_admin_email(),
            password: default_admin_password(),
        }
    }
}

impl PortalConfig {
    /// Builder method to set the storage namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.storage.namespace = namespace.into();
        self
    }

    /// Builder method to toggle demo-account seeding.
    pub fn with_demo_users(mut self, seed: bool) -> Self {
        self.directory.seed_demo_users = seed;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portal.toml"
    }

    /// Storage keys for the configured namespace.
    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::new(self.storage.namespace.clone())
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = PortalConfig::from_toml("").unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.storage.namespace, "campus-portal");
        assert_eq!(config.directory.email_domain, "campus.edu");
        assert!(config.directory.seed_demo_users);
        assert_eq!(config.admin.email, "admin@campus.edu");
    }

    #[test]
    fn test_partial_sections() {
        let config = PortalConfig::from_toml(
            r#"
            [directory]
            email_domain = "uni.example"
            "#,
        )
        .unwrap();
        assert_eq!(config.directory.email_domain, "uni.example");
        assert!(config.directory.seed_demo_users);
        assert_eq!(config.storage.namespace, "campus-portal");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = PortalConfig::default()
            .with_namespace("staging")
            .with_demo_users(false);
        let text = config.to_toml().unwrap();
        let parsed = PortalConfig::from_toml(&text).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.storage_keys().namespace(), "staging");
    }
}
