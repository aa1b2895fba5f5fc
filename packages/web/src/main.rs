use dioxus::prelude::*;

use store::PortalConfig;
use ui::views::{
    AdminLogsView, AdminSettingsView, AdminUsersView, AuthPage, ClubsView, Dashboard, EventsView,
    MapView, NotificationsView, SubjectsView, SupportView,
};
use ui::SessionProvider;
use views::PortalLayout;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(PortalLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/map")]
        MapView {},
        #[route("/events")]
        EventsView {},
        #[route("/clubs")]
        ClubsView {},
        #[route("/subjects")]
        SubjectsView {},
        #[route("/notifications")]
        NotificationsView {},
        #[route("/support")]
        SupportView {},
        #[route("/admin/users")]
        AdminUsersView {},
        #[route("/admin/logs")]
        AdminLogsView {},
        #[route("/admin/settings")]
        AdminSettingsView {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const PORTAL_TOML: &str = include_str!("../portal.toml");

fn main() {
    dioxus::launch(App);
}

/// The embedded configuration, or the defaults when it does not parse.
fn load_config() -> PortalConfig {
    PortalConfig::from_toml(PORTAL_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {e}", PortalConfig::filename());
        PortalConfig::default()
    })
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::PORTAL_CSS }

        SessionProvider {
            config: load_config(),
            Router::<Route> {}
        }
    }
}

/// `/` shows the login page, or moves on to `/dashboard` when a readable
/// session exists. A bare token is not enough: the layout would have no user
/// to show.
#[component]
fn Root() -> Element {
    let portal = ui::use_portal();
    let _ = ui::use_session().read();
    let nav = use_navigator();

    if portal.session().is_some() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    rsx! {
        AuthPage {}
        ui::NoticeStack {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = PortalConfig::from_toml(PORTAL_TOML).unwrap();
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_routes_match_navigation_paths() {
        for item in portal::access::NAV_ITEMS {
            let route: Route = item.path.parse().unwrap();
            assert_eq!(route.to_string(), item.path);
        }
    }
}
