//! Site settings form.

use dioxus::prelude::*;

use crate::notices::{notify, use_notices, NoticeLevel};
use crate::session::use_portal;

#[component]
pub fn AdminSettingsView() -> Element {
    let portal = use_portal();
    let mut notices = use_notices();
    let loader = portal.clone();
    let mut settings = use_signal(move || loader.settings().load());
    let current = settings();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        match portal.settings().save(&settings()) {
            Ok(()) => notify(&mut notices, NoticeLevel::Success, "Settings saved"),
            Err(e) => notify(&mut notices, NoticeLevel::Error, &e.to_string()),
        }
    };

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Settings" }
            form {
                class: "card form",
                onsubmit: onsubmit,
                label { "Site name" }
                input {
                    value: "{current.site_name}",
                    oninput: move |evt: FormEvent| settings.write().site_name = evt.value(),
                }
                label { "Site email" }
                input {
                    r#type: "email",
                    value: "{current.site_email}",
                    oninput: move |evt: FormEvent| settings.write().site_email = evt.value(),
                }
                label { "Support email" }
                input {
                    r#type: "email",
                    value: "{current.support_email}",
                    oninput: move |evt: FormEvent| settings.write().support_email = evt.value(),
                }
                label { "Maximum upload size (MB)" }
                input {
                    r#type: "number",
                    min: "1",
                    value: "{current.max_file_size}",
                    oninput: move |evt: FormEvent| {
                        settings.write().max_file_size = evt.value().parse().unwrap_or(0);
                    },
                }
                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: current.maintenance_mode,
                        onchange: move |evt: FormEvent| settings.write().maintenance_mode = evt.checked(),
                    }
                    " Maintenance mode"
                }
                button { class: "btn primary", r#type: "submit", "Save settings" }
            }
        }
    }
}
