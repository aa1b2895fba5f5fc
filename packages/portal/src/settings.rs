//! Site-wide settings edited on the admin settings screen.

use serde::{Deserialize, Serialize};
use store::json::{read_json, write_json};
use store::{Collection, KeyValueStore, StorageKeys};

use crate::error::{PortalError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_name: String,
    pub site_email: String,
    pub support_email: String,
    /// Upload limit in megabytes.
    pub max_file_size: u32,
    pub maintenance_mode: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Campus APP".to_string(),
            site_email: "info@campus.edu".to_string(),
            support_email: "support@campus.edu".to_string(),
            max_file_size: 10,
            maintenance_mode: false,
        }
    }
}

impl SiteSettings {
    pub fn validate(&self) -> Result<()> {
        if self.site_name.trim().chars().count() < 2 {
            return Err(PortalError::validation(
                "Site name must be at least 2 characters",
            ));
        }
        if !is_plausible_email(&self.site_email) {
            return Err(PortalError::validation("Invalid email address"));
        }
        if !is_plausible_email(&self.support_email) {
            return Err(PortalError::validation("Invalid support email address"));
        }
        if self.max_file_size < 1 {
            return Err(PortalError::validation("File size must be at least 1MB"));
        }
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace.
fn is_plausible_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[derive(Clone, Debug)]
pub struct SettingsStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S, keys: &StorageKeys) -> Self {
        Self {
            store,
            key: keys.key(Collection::Settings),
        }
    }

    /// Stored settings, or the defaults.
    pub fn load(&self) -> SiteSettings {
        read_json(&self.store, &self.key).unwrap_or_default()
    }

    pub fn save(&self, settings: &SiteSettings) -> Result<()> {
        settings.validate()?;
        write_json(&self.store, &self.key, settings)?;
        tracing::info!(maintenance = settings.maintenance_mode, "site settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_defaults_until_saved() {
        let settings = SettingsStore::new(MemoryStore::new(), &StorageKeys::default());
        assert_eq!(settings.load(), SiteSettings::default());

        let updated = SiteSettings {
            site_name: "North Campus".into(),
            maintenance_mode: true,
            ..Default::default()
        };
        settings.save(&updated).unwrap();
        assert_eq!(settings.load(), updated);
    }

    #[test]
    fn test_invalid_settings_are_not_saved() {
        let settings = SettingsStore::new(MemoryStore::new(), &StorageKeys::default());
        let bad = SiteSettings {
            support_email: "support at campus".into(),
            ..Default::default()
        };
        assert_eq!(
            settings.save(&bad).unwrap_err().to_string(),
            "Invalid support email address"
        );
        assert_eq!(settings.load(), SiteSettings::default());

        let tiny = SiteSettings {
            max_file_size: 0,
            ..Default::default()
        };
        assert!(tiny.validate().is_err());
    }

    #[test]
    fn test_email_check() {
        assert!(is_plausible_email("info@campus.edu"));
        assert!(!is_plausible_email("info@campus"));
        assert!(!is_plausible_email("@campus.edu"));
        assert!(!is_plausible_email("a@b@campus.edu"));
        assert!(!is_plausible_email("a b@campus.edu"));
    }
}
