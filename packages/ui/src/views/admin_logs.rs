//! System logs: searchable list with regenerate and clear.

use dioxus::prelude::*;
use portal::admin_logs::search_logs;
use portal::LogLevel;

use crate::notices::{notify, use_notices, NoticeLevel};
use crate::session::use_portal;

#[component]
pub fn AdminLogsView() -> Element {
    let portal = use_portal();
    let mut notices = use_notices();
    let mut query = use_signal(String::new);
    let loader = portal.clone();
    let mut entries = use_signal(move || {
        loader.logs().load().unwrap_or_else(|e| {
            tracing::error!("Failed to load logs: {e}");
            Vec::new()
        })
    });

    let regen = portal.clone();
    let on_regenerate = move |_| match regen.logs().regenerate(&mut rand::thread_rng()) {
        Ok(fresh) => {
            entries.set(fresh);
            notify(&mut notices, NoticeLevel::Success, "Generated new sample logs");
        }
        Err(e) => notify(&mut notices, NoticeLevel::Error, &e.to_string()),
    };

    let on_clear = move |_| {
        portal.logs().clear();
        entries.set(Vec::new());
        notify(&mut notices, NoticeLevel::Info, "Logs cleared");
    };

    let visible = search_logs(&entries.read(), &query());

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { class: "page-title", "System Logs" }
                div {
                    class: "form-actions",
                    button { class: "btn", onclick: on_regenerate, "Refresh" }
                    button { class: "btn danger", onclick: on_clear, "Clear" }
                }
            }

            input {
                class: "search",
                r#type: "search",
                placeholder: "Search message, module or user...",
                value: "{query}",
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }

            p { class: "muted", "{visible.len()} entries" }

            table {
                class: "table",
                thead {
                    tr {
                        th { "Time" }
                        th { "Level" }
                        th { "Module" }
                        th { "User" }
                        th { "Message" }
                    }
                }
                tbody {
                    for entry in visible {
                        tr {
                            key: "{entry.id}",
                            td { {entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()} }
                            td {
                                span {
                                    class: match entry.level {
                                        LogLevel::Info => "badge",
                                        LogLevel::Warning => "badge warning",
                                        LogLevel::Error => "badge error",
                                    },
                                    {entry.level.as_str()}
                                }
                            }
                            td { "{entry.module}" }
                            td { {entry.user.clone().unwrap_or_else(|| "-".to_string())} }
                            td { "{entry.message}" }
                        }
                    }
                }
            }
        }
    }
}
