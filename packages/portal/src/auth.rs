//! # Login, signup and logout
//!
//! Accounts are looked up in the [`Directory`]; a successful login or signup
//! saves the account through the [`IdentityStore`], which is what opens the
//! session gate. There are no passwords for campus accounts: name plus roll
//! number is the credential. The administrator login compares against the
//! configured plaintext pair.

use store::config::AdminConfig;
use store::KeyValueStore;

use crate::directory::{Directory, UserDraft};
use crate::error::{PortalError, Result};
use crate::identity::IdentityStore;
use crate::models::{Affiliation, Department, Major, Role, StaffType, User};

/// Id of the built-in administrator identity.
pub const ADMIN_ID: &str = "admin-1";

/// Signup form input, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub roll_number: String,
    pub role: Option<Role>,
    pub major: Option<Major>,
    pub department: Option<Department>,
    pub staff_type: Option<StaffType>,
}

impl SignupForm {
    /// Check required fields and turn the form into a directory draft.
    pub fn into_draft(self) -> Result<UserDraft> {
        let name = self.name.trim();
        let roll_number = self.roll_number.trim();
        let Some(role) = self.role else {
            return Err(PortalError::validation("Please fill in all required fields"));
        };
        if name.is_empty() || roll_number.is_empty() {
            return Err(PortalError::validation("Please fill in all required fields"));
        }

        let affiliation = match role {
            Role::Student => Affiliation::Student {
                major: Some(
                    self.major
                        .ok_or_else(|| PortalError::validation("Please select a major"))?,
                ),
            },
            Role::Faculty => Affiliation::Faculty {
                department: Some(
                    self.department
                        .ok_or_else(|| PortalError::validation("Please select a department"))?,
                ),
            },
            Role::Staff => Affiliation::Staff {
                staff_type: Some(
                    self.staff_type
                        .ok_or_else(|| PortalError::validation("Please select a staff type"))?,
                ),
            },
            Role::Admin => {
                return Err(PortalError::validation(
                    "Administrator accounts cannot be created from the signup form",
                ))
            }
        };

        Ok(UserDraft::new(name, roll_number, affiliation))
    }
}

/// Demo accounts available on a fresh install.
pub fn demo_users(directory_domain: &str) -> Vec<User> {
    let make = |id: &str, name: &str, roll: &str, affiliation: Affiliation| User {
        id: id.to_string(),
        name: name.to_string(),
        email: crate::directory::generate_email(name, roll, directory_domain),
        roll_number: roll.to_string(),
        affiliation,
        created_at: None,
    };
    vec![
        make(
            "1",
            "John Smith",
            "2023CS001",
            Affiliation::Student {
                major: Some(Major::ComputerScience),
            },
        ),
        make(
            "2",
            "Sarah Johnson",
            "2023FAC001",
            Affiliation::Faculty {
                department: Some(Department::ComputerScience),
            },
        ),
        make(
            "3",
            "Mike Davis",
            "2023STF001",
            Affiliation::Staff {
                staff_type: Some(StaffType::EventManager),
            },
        ),
    ]
}

/// Authentication flows over the directory and identity store.
#[derive(Clone, Debug)]
pub struct Authenticator<S> {
    directory: Directory<S>,
    identity: IdentityStore<S>,
    admin: AdminConfig,
}

impl<S: KeyValueStore> Authenticator<S> {
    pub fn new(directory: Directory<S>, identity: IdentityStore<S>, admin: AdminConfig) -> Self {
        Self {
            directory,
            identity,
            admin,
        }
    }

    /// Log in with a display name (any case) and an exact roll number.
    pub fn login(&self, name: &str, roll_number: &str) -> Result<User> {
        let name = name.trim();
        let roll_number = roll_number.trim();
        let user = self
            .directory
            .all()
            .into_iter()
            .find(|u| u.name.to_lowercase() == name.to_lowercase() && u.roll_number == roll_number)
            .ok_or_else(|| {
                tracing::info!(name, "login rejected");
                PortalError::InvalidCredentials
            })?;

        self.identity.save(&user)?;
        tracing::info!(id = %user.id, role = %user.role(), "user logged in");
        Ok(user)
    }

    /// Create an account from `form` and log it in.
    pub fn signup(&self, form: SignupForm) -> Result<User> {
        let draft = form.into_draft()?;
        let user = self.directory.add(&draft)?;
        self.identity.save(&user)?;
        tracing::info!(id = %user.id, role = %user.role(), "account created");
        Ok(user)
    }

    /// Log in as the built-in administrator.
    pub fn login_admin(&self, email: &str, password: &str) -> Result<User> {
        if email.trim() != self.admin.email || password != self.admin.password {
            tracing::info!("administrator login rejected");
            return Err(PortalError::InvalidCredentials);
        }

        let admin = User {
            id: ADMIN_ID.to_string(),
            name: "System Administrator".to_string(),
            email: self.admin.email.clone(),
            roll_number: "ADMIN-001".to_string(),
            affiliation: Affiliation::Admin,
            created_at: None,
        };
        self.identity.save(&admin)?;
        tracing::info!("administrator logged in");
        Ok(admin)
    }

    pub fn logout(&self) {
        self.identity.clear();
        tracing::info!("logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::SessionGate;
    use store::{MemoryStore, StorageKeys};

    struct Fixture {
        auth: Authenticator<MemoryStore>,
        directory: Directory<MemoryStore>,
        identity: IdentityStore<MemoryStore>,
        gate: SessionGate<MemoryStore>,
    }

    fn fixture() -> Fixture {
        let store = MemoryStore::new();
        let keys = StorageKeys::default();
        let directory = Directory::new(store.clone(), &keys, "campus.edu");
        directory.seed_if_empty(&demo_users("campus.edu")).unwrap();
        let identity = IdentityStore::new(store.clone(), &keys, directory.clone());
        Fixture {
            auth: Authenticator::new(directory.clone(), identity.clone(), AdminConfig::default()),
            directory,
            identity,
            gate: SessionGate::new(store, &keys),
        }
    }

    fn student_form() -> SignupForm {
        SignupForm {
            name: "Jane Doe".into(),
            roll_number: "2023CS002".into(),
            role: Some(Role::Student),
            major: Some(Major::Biology),
            ..Default::default()
        }
    }

    #[test]
    fn test_login_matches_name_case_insensitively() {
        let f = fixture();
        let user = f.auth.login("john smith", "2023CS001").unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(f.identity.current(), Some(user));
        assert!(f.gate.is_authenticated());
    }

    #[test]
    fn test_login_requires_exact_roll_number() {
        let f = fixture();
        assert!(matches!(
            f.auth.login("John Smith", "2023cs001"),
            Err(PortalError::InvalidCredentials)
        ));
        assert!(!f.gate.is_authenticated());
    }

    #[test]
    fn test_signup_creates_and_logs_in() {
        let f = fixture();
        let user = f.auth.signup(student_form()).unwrap();

        assert_eq!(user.email, "jane.doe2023cs002@campus.edu");
        assert_eq!(user.affiliation, Affiliation::Student { major: Some(Major::Biology) });
        assert!(user.created_at.is_some());
        assert_eq!(f.identity.current(), Some(user.clone()));
        assert_eq!(f.directory.get(&user.id), Some(user));

        // Same name and roll again collides
        assert!(matches!(
            f.auth.signup(student_form()),
            Err(PortalError::EmailTaken(_))
        ));
    }

    #[test]
    fn test_signup_validation() {
        let f = fixture();
        let missing_major = SignupForm {
            major: None,
            ..student_form()
        };
        let err = f.auth.signup(missing_major).unwrap_err();
        assert_eq!(err.to_string(), "Please select a major");

        let faculty = SignupForm {
            role: Some(Role::Faculty),
            ..student_form()
        };
        assert_eq!(
            f.auth.signup(faculty).unwrap_err().to_string(),
            "Please select a department"
        );

        let no_role = SignupForm {
            role: None,
            ..student_form()
        };
        assert!(matches!(f.auth.signup(no_role), Err(PortalError::Validation(_))));

        let admin = SignupForm {
            role: Some(Role::Admin),
            ..student_form()
        };
        assert!(matches!(f.auth.signup(admin), Err(PortalError::Validation(_))));

        assert!(!f.gate.is_authenticated());
    }

    #[test]
    fn test_admin_login_and_logout() {
        let f = fixture();
        assert!(f.auth.login_admin("admin@campus.edu", "wrong").is_err());

        let admin = f.auth.login_admin("admin@campus.edu", "1234").unwrap();
        assert_eq!(admin.role(), Role::Admin);
        assert_eq!(admin.id, ADMIN_ID);
        assert!(f.gate.is_authenticated());

        f.auth.logout();
        assert!(!f.gate.is_authenticated());
        assert!(f.identity.current().is_none());
    }
}
