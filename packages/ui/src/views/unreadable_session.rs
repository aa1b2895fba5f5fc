//! Shown when a token is stored but the user record cannot be read.

use dioxus::prelude::*;
use portal::{DashboardView, GateState};

use crate::notices::{notify, use_notices, NoticeLevel};
use crate::session::{refresh_session, use_portal, use_session};

/// Explains what is wrong with the stored session and offers a logout.
#[component]
pub fn UnreadableSession(state: GateState) -> Element {
    let portal = use_portal();
    let mut session = use_session();
    let mut notices = use_notices();
    let nav = use_navigator();

    let message = match state.invalid_role() {
        Some(DashboardView::InvalidRole(tag)) => format!("Invalid user role: {tag}"),
        _ => "Your saved session could not be read.".to_string(),
    };

    let onclick = move |_| {
        portal.auth().logout();
        refresh_session(&portal, &mut session);
        notify(&mut notices, NoticeLevel::Info, "Please log in again");
        nav.replace("/");
    };

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "card",
                h2 { class: "card-title", "{message}" }
                p { class: "muted", "Log out and sign in again to continue." }
                button { class: "btn primary", onclick: onclick, "Log out" }
            }
        }
    }
}
