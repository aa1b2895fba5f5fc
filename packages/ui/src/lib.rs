//! This crate contains all shared UI for the campus portal.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_portal, make_store, PlatformPortal, PlatformStore};

pub mod views;

pub const PORTAL_CSS: Asset = asset!("/assets/portal.css");

mod session;
pub use session::{refresh_session, use_portal, use_session, SessionProvider};

mod sidebar;
pub use sidebar::AppSidebar;

pub mod notices;
pub use notices::{notify, use_notices, Notice, NoticeLevel, NoticeStack, Notices};
