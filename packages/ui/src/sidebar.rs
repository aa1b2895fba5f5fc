use dioxus::prelude::*;
use portal::{NavIcon, NavItem};

use crate::icons::{
    FaBell, FaBook, FaCalendar, FaCircleQuestion, FaGear, FaHouse, FaList, FaMap,
    FaRightFromBracket, FaUserGear, FaUsers,
};
use crate::notices::{notify, use_notices, NoticeLevel};
use crate::session::{refresh_session, use_portal, use_session};
use crate::Icon;

/// Role-filtered navigation for the logged-in user.
#[component]
pub fn AppSidebar(
    /// Path of the current route, used to highlight the active entry.
    active_path: String,
) -> Element {
    let session = use_session();
    let portal = use_portal();
    let site_name = portal.settings().load().site_name;

    let Some(current) = session() else {
        return rsx! {};
    };
    let view = current.view();

    rsx! {
        div {
            class: "sidebar",

            div {
                class: "sidebar-header",
                span { class: "sidebar-title", "{site_name}" }
            }

            nav {
                class: "sidebar-nav",
                for item in view.nav {
                    NavEntry {
                        key: "{item.path}",
                        item: *item,
                        active: item.path == active_path,
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                div {
                    class: "sidebar-user",
                    span { class: "sidebar-user-name", "{current.user.name}" }
                    span { class: "sidebar-user-role", {current.role().label()} }
                }
                LogoutItem {}
            }
        }
    }
}

#[component]
fn NavEntry(item: NavItem, active: bool) -> Element {
    rsx! {
        Link {
            class: if active { "sidebar-item active" } else { "sidebar-item" },
            to: item.path,
            NavGlyph { icon: item.icon }
            span { "{item.name}" }
        }
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon { icon: FaHouse, width: 16, height: 16 } },
        NavIcon::Map => rsx! { Icon { icon: FaMap, width: 16, height: 16 } },
        NavIcon::Calendar => rsx! { Icon { icon: FaCalendar, width: 16, height: 16 } },
        NavIcon::Users => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        NavIcon::Book => rsx! { Icon { icon: FaBook, width: 16, height: 16 } },
        NavIcon::Bell => rsx! { Icon { icon: FaBell, width: 16, height: 16 } },
        NavIcon::Help => rsx! { Icon { icon: FaCircleQuestion, width: 16, height: 16 } },
        NavIcon::UserCog => rsx! { Icon { icon: FaUserGear, width: 16, height: 16 } },
        NavIcon::List => rsx! { Icon { icon: FaList, width: 16, height: 16 } },
        NavIcon::Settings => rsx! { Icon { icon: FaGear, width: 16, height: 16 } },
    }
}

#[component]
fn LogoutItem() -> Element {
    let portal = use_portal();
    let mut session = use_session();
    let mut notices = use_notices();
    let nav = use_navigator();

    let onclick = move |_| {
        portal.auth().logout();
        refresh_session(&portal, &mut session);
        notify(&mut notices, NoticeLevel::Info, "You have been logged out");
        nav.replace("/");
    };

    rsx! {
        button {
            class: "sidebar-bottom-item",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            " Log out"
        }
    }
}
