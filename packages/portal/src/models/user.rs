//! # User model
//!
//! A [`User`] is one account: opaque `id`, display `name`, roll/ID number,
//! generated `email`, and an [`Affiliation`] carrying the role tag together with
//! the attribute that only makes sense for that role (a student's major, a
//! faculty member's department, a staff member's staff type).
//!
//! ## Wire layout
//!
//! Records are stored as flat JSON objects so that data written by earlier
//! builds still reads:
//!
//! ```json
//! {
//!   "id": "1",
//!   "name": "John Smith",
//!   "email": "john.smith2023cs001@campus.edu",
//!   "rollNumber": "2023CS001",
//!   "role": "student",
//!   "major": "Computer Science",
//!   "createdAt": "2025-04-01T10:00:00Z"
//! }
//! ```
//!
//! The `role` field is the tag of [`Affiliation`]; `major`, `department` and
//! `staffType` are only read for the matching role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed classification driving dashboard and navigation visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Faculty,
    Staff,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Student, Role::Faculty, Role::Staff, Role::Admin];

    /// Lower-case tag used in storage and routes.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Staff => "staff",
            Role::Admin => "admin",
        }
    }

    /// Capitalised label for display.
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Faculty => "Faculty",
            Role::Staff => "Staff",
            Role::Admin => "Admin",
        }
    }

    /// Parse a role tag. Matching is exact, like the stored tags.
    pub fn parse(tag: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == tag)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of study a student can major in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Major {
    Biology,
    Mathematics,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Nursing,
}

impl Major {
    pub const ALL: [Major; 4] = [
        Major::Biology,
        Major::Mathematics,
        Major::ComputerScience,
        Major::Nursing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Major::Biology => "Biology",
            Major::Mathematics => "Mathematics",
            Major::ComputerScience => "Computer Science",
            Major::Nursing => "Nursing",
        }
    }

    pub fn parse(s: &str) -> Option<Major> {
        Major::ALL.into_iter().find(|m| m.as_str() == s)
    }
}

/// Academic departments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Biology,
    Mathematics,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Nursing,
    Physics,
    Chemistry,
    Economics,
}

impl Department {
    pub const ALL: [Department; 7] = [
        Department::Biology,
        Department::Mathematics,
        Department::ComputerScience,
        Department::Nursing,
        Department::Physics,
        Department::Chemistry,
        Department::Economics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Biology => "Biology",
            Department::Mathematics => "Mathematics",
            Department::ComputerScience => "Computer Science",
            Department::Nursing => "Nursing",
            Department::Physics => "Physics",
            Department::Chemistry => "Chemistry",
            Department::Economics => "Economics",
        }
    }

    pub fn parse(s: &str) -> Option<Department> {
        Department::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

/// Kinds of non-academic staff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffType {
    #[serde(rename = "Event Manager")]
    EventManager,
    Cleaning,
}

impl StaffType {
    pub const ALL: [StaffType; 2] = [StaffType::EventManager, StaffType::Cleaning];

    pub fn as_str(self) -> &'static str {
        match self {
            StaffType::EventManager => "Event Manager",
            StaffType::Cleaning => "Cleaning",
        }
    }

    pub fn parse(s: &str) -> Option<StaffType> {
        StaffType::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Role tag plus the role-specific attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Affiliation {
    Student {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        major: Option<Major>,
    },
    Faculty {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        department: Option<Department>,
    },
    Staff {
        #[serde(
            default,
            rename = "staffType",
            skip_serializing_if = "Option::is_none"
        )]
        staff_type: Option<StaffType>,
    },
    Admin,
}

impl Default for Affiliation {
    fn default() -> Self {
        Affiliation::Student { major: None }
    }
}

impl Affiliation {
    pub fn role(&self) -> Role {
        match self {
            Affiliation::Student { .. } => Role::Student,
            Affiliation::Faculty { .. } => Role::Faculty,
            Affiliation::Staff { .. } => Role::Staff,
            Affiliation::Admin => Role::Admin,
        }
    }

    /// Affiliation for `role` with its attribute unset.
    pub fn bare(role: Role) -> Self {
        match role {
            Role::Student => Affiliation::Student { major: None },
            Role::Faculty => Affiliation::Faculty { department: None },
            Role::Staff => Affiliation::Staff { staff_type: None },
            Role::Admin => Affiliation::Admin,
        }
    }

    /// Human-readable description of the role-specific attribute, if set.
    pub fn detail(&self) -> Option<&'static str> {
        match self {
            Affiliation::Student { major } => major.map(Major::as_str),
            Affiliation::Faculty { department } => department.map(Department::as_str),
            Affiliation::Staff { staff_type } => staff_type.map(StaffType::as_str),
            Affiliation::Admin => None,
        }
    }
}

/// An account known to the portal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub roll_number: String,
    #[serde(flatten)]
    pub affiliation: Affiliation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn role(&self) -> Role {
        self.affiliation.role()
    }

    /// First word of the display name, for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_wire_layout() {
        let user = User {
            id: "1".into(),
            name: "John Smith".into(),
            email: "john.smith2023cs001@campus.edu".into(),
            roll_number: "2023CS001".into(),
            affiliation: Affiliation::Student {
                major: Some(Major::ComputerScience),
            },
            created_at: None,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "student");
        assert_eq!(value["major"], "Computer Science");
        assert_eq!(value["rollNumber"], "2023CS001");
        assert!(value.get("createdAt").is_none());
        assert!(value.get("department").is_none());
    }

    #[test]
    fn test_reads_legacy_record() {
        let raw = r#"{
            "id": "3",
            "name": "Mike Davis",
            "rollNumber": "2023STF001",
            "email": "mikedavis2023stf001@campus.edu",
            "role": "staff",
            "staffType": "Event Manager"
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.role(), Role::Staff);
        assert_eq!(
            user.affiliation,
            Affiliation::Staff {
                staff_type: Some(StaffType::EventManager)
            }
        );
        assert_eq!(user.affiliation.detail(), Some("Event Manager"));
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let raw = r#"{"id":"x","name":"X","email":"","rollNumber":"","role":"dean"}"#;
        assert!(serde_json::from_str::<User>(raw).is_err());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("faculty"), Some(Role::Faculty));
        assert_eq!(Role::parse("Faculty"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::Admin.to_string(), "admin");
    }
}
