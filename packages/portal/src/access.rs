//! # Role-based view selection
//!
//! A pure mapping from a [`Role`] to the dashboard it sees and the navigation
//! entries listed in its sidebar. Visibility is a static allow-list per entry;
//! administrators see every entry.

use crate::models::Role;

/// Which dashboard a session lands on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Student,
    Faculty,
    Staff,
    Admin,
    /// The stored role tag is not one the portal knows.
    InvalidRole(String),
}

impl DashboardView {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Student => DashboardView::Student,
            Role::Faculty => DashboardView::Faculty,
            Role::Staff => DashboardView::Staff,
            Role::Admin => DashboardView::Admin,
        }
    }

    /// Like [`DashboardView::for_role`], from a raw tag.
    pub fn for_tag(tag: &str) -> Self {
        match Role::parse(tag) {
            Some(role) => DashboardView::for_role(role),
            None => DashboardView::InvalidRole(tag.to_string()),
        }
    }
}

/// Icon shown next to a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Map,
    Calendar,
    Users,
    Book,
    Bell,
    Help,
    UserCog,
    List,
    Settings,
}

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    /// Roles that see this entry (admins see every entry regardless).
    pub show_for: &'static [Role],
}

impl NavItem {
    pub fn visible_to(&self, role: Role) -> bool {
        role == Role::Admin || self.show_for.contains(&role)
    }
}

const CAMPUS_ROLES: &[Role] = &[Role::Student, Role::Faculty, Role::Staff];

/// Sidebar entries in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Dashboard",
        path: "/dashboard",
        icon: NavIcon::Home,
        show_for: CAMPUS_ROLES,
    },
    NavItem {
        name: "Campus Map",
        path: "/map",
        icon: NavIcon::Map,
        show_for: CAMPUS_ROLES,
    },
    NavItem {
        name: "Events",
        path: "/events",
        icon: NavIcon::Calendar,
        show_for: CAMPUS_ROLES,
    },
    NavItem {
        name: "Clubs",
        path: "/clubs",
        icon: NavIcon::Users,
        show_for: &[Role::Student, Role::Faculty],
    },
    NavItem {
        name: "Subjects",
        path: "/subjects",
        icon: NavIcon::Book,
        show_for: &[Role::Student],
    },
    NavItem {
        name: "Notifications",
        path: "/notifications",
        icon: NavIcon::Bell,
        show_for: CAMPUS_ROLES,
    },
    NavItem {
        name: "Support",
        path: "/support",
        icon: NavIcon::Help,
        show_for: CAMPUS_ROLES,
    },
    NavItem {
        name: "User Management",
        path: "/admin/users",
        icon: NavIcon::UserCog,
        show_for: &[Role::Admin],
    },
    NavItem {
        name: "System Logs",
        path: "/admin/logs",
        icon: NavIcon::List,
        show_for: &[Role::Admin],
    },
    NavItem {
        name: "Settings",
        path: "/admin/settings",
        icon: NavIcon::Settings,
        show_for: &[Role::Admin],
    },
];

/// Entries visible to `role`, in display order.
pub fn nav_for(role: Role) -> Vec<&'static NavItem> {
    NAV_ITEMS.iter().filter(|item| item.visible_to(role)).collect()
}

/// Whether `path` is one of `role`'s navigation entries.
pub fn can_visit(role: Role, path: &str) -> bool {
    NAV_ITEMS
        .iter()
        .any(|item| item.path == path && item.visible_to(role))
}

/// Dashboard plus navigation for one role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleView {
    pub dashboard: DashboardView,
    pub nav: Vec<&'static NavItem>,
}

pub fn select_view(role: Role) -> RoleView {
    RoleView {
        dashboard: DashboardView::for_role(role),
        nav: nav_for(role),
    }
}

/// [`select_view`] from a raw tag; unknown tags get no navigation.
pub fn select_view_for_tag(tag: &str) -> RoleView {
    match Role::parse(tag) {
        Some(role) => select_view(role),
        None => RoleView {
            dashboard: DashboardView::InvalidRole(tag.to_string()),
            nav: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(role: Role) -> Vec<&'static str> {
        nav_for(role).iter().map(|item| item.name).collect()
    }

    #[test]
    fn test_nav_respects_allow_lists() {
        for role in [Role::Student, Role::Faculty, Role::Staff] {
            for item in nav_for(role) {
                assert!(item.show_for.contains(&role), "{} leaked to {role}", item.name);
            }
        }
    }

    #[test]
    fn test_nav_per_role() {
        assert_eq!(
            names(Role::Student),
            vec![
                "Dashboard",
                "Campus Map",
                "Events",
                "Clubs",
                "Subjects",
                "Notifications",
                "Support",
            ]
        );
        assert_eq!(
            names(Role::Faculty),
            vec!["Dashboard", "Campus Map", "Events", "Clubs", "Notifications", "Support"]
        );
        assert_eq!(
            names(Role::Staff),
            vec!["Dashboard", "Campus Map", "Events", "Notifications", "Support"]
        );
    }

    #[test]
    fn test_admin_sees_everything() {
        assert_eq!(nav_for(Role::Admin).len(), NAV_ITEMS.len());
        assert!(can_visit(Role::Admin, "/subjects"));
        assert!(can_visit(Role::Admin, "/admin/users"));
        assert!(!can_visit(Role::Staff, "/clubs"));
        assert!(!can_visit(Role::Student, "/admin/logs"));
        assert!(!can_visit(Role::Student, "/nowhere"));
    }

    #[test]
    fn test_dashboard_selection() {
        assert_eq!(DashboardView::for_role(Role::Faculty), DashboardView::Faculty);
        assert_eq!(DashboardView::for_tag("admin"), DashboardView::Admin);
        assert_eq!(
            DashboardView::for_tag("dean"),
            DashboardView::InvalidRole("dean".into())
        );

        let view = select_view_for_tag("dean");
        assert!(view.nav.is_empty());
        assert_eq!(select_view(Role::Staff).dashboard, DashboardView::Staff);
    }
}
