//! Layout shared by every route behind the session gate.

use dioxus::prelude::*;
use portal::access::can_visit;
use portal::GateState;
use ui::views::UnreadableSession;
use ui::{use_portal, use_session, AppSidebar, NoticeStack};

use crate::Route;

/// Renders the sidebar around the child route.
///
/// Closed gate: back to `/`. A token whose user record cannot be read gets an
/// explanation and a logout button instead of the route. A role without the
/// route in its navigation goes to `/dashboard`.
#[component]
pub fn PortalLayout() -> Element {
    let portal = use_portal();
    // Subscribe so login and logout re-run the checks below.
    let _ = use_session().read();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let path = route.to_string();

    let current = match portal.gate_state() {
        GateState::Closed => {
            nav.replace(Route::Root {});
            return rsx! {};
        }
        state @ GateState::Unreadable { .. } => {
            return rsx! {
                UnreadableSession { state }
                NoticeStack {}
            };
        }
        GateState::Active(session) => session,
    };

    if !can_visit(current.role(), &path) {
        tracing::debug!(path = %path, role = %current.role(), "route not in navigation");
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    rsx! {
        div {
            class: "app-shell",
            AppSidebar { active_path: path }
            main {
                class: "app-content",
                Outlet::<Route> {}
            }
            NoticeStack {}
        }
    }
}
