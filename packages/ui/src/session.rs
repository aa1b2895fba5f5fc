//! Session context and hooks for the UI.

use dioxus::prelude::*;
use portal::Session;
use store::PortalConfig;

use crate::notices::Notices;
use crate::platform::{make_portal, PlatformPortal};

/// The portal shared by every view.
pub fn use_portal() -> PlatformPortal {
    use_context::<PlatformPortal>()
}

/// The current session. `None` while logged out.
///
/// Views re-render when login or logout replaces it.
pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}

/// Re-read the session from storage after a login, signup or logout.
pub fn refresh_session(portal: &PlatformPortal, session: &mut Signal<Option<Session>>) {
    session.set(portal.session());
}

/// Provider component that opens the portal and tracks the session.
/// Wrap your app with this component.
#[component]
pub fn SessionProvider(config: PortalConfig, children: Element) -> Element {
    let portal = use_context_provider(|| make_portal(config.clone()));
    let session = use_signal(|| portal.session());
    use_context_provider(|| session);
    use_context_provider(|| Signal::new(Notices::default()));

    rsx! {
        {children}
    }
}
