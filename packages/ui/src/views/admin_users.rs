//! User management: list, add, edit and delete directory accounts.

use dioxus::prelude::*;
use portal::models::{Affiliation, Department, Major, Role, StaffType, User};
use portal::UserDraft;

use crate::notices::{notify, use_notices, NoticeLevel};
use crate::session::use_portal;

fn affiliation_for(role: Role, detail: &str) -> Affiliation {
    match role {
        Role::Student => Affiliation::Student {
            major: Major::parse(detail),
        },
        Role::Faculty => Affiliation::Faculty {
            department: Department::parse(detail),
        },
        Role::Staff => Affiliation::Staff {
            staff_type: StaffType::parse(detail),
        },
        Role::Admin => Affiliation::Admin,
    }
}

fn detail_options(role: Role) -> Vec<&'static str> {
    match role {
        Role::Student => Major::ALL.into_iter().map(Major::as_str).collect(),
        Role::Faculty => Department::ALL.into_iter().map(Department::as_str).collect(),
        Role::Staff => StaffType::ALL.into_iter().map(StaffType::as_str).collect(),
        Role::Admin => Vec::new(),
    }
}

/// Key for the editor: a different user (or a new one) remounts the form so
/// its fields start from that user.
fn editor_key(target: Option<&User>) -> String {
    match target {
        Some(user) => format!("edit-{}", user.id),
        None => "new".to_string(),
    }
}

#[component]
pub fn AdminUsersView() -> Element {
    let portal = use_portal();
    let mut notices = use_notices();
    let mut query = use_signal(String::new);
    // `Some(None)` edits a new user, `Some(Some(user))` an existing one.
    let mut editing = use_signal(|| Option::<Option<User>>::None);
    let mut revision = use_signal(|| 0u32);
    let _ = revision();

    let needle = query().to_lowercase();
    let users: Vec<User> = portal
        .directory()
        .all()
        .into_iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&needle)
                || u.email.to_lowercase().contains(&needle)
                || u.roll_number.to_lowercase().contains(&needle)
        })
        .collect();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { class: "page-title", "User Management" }
                button {
                    class: "btn primary",
                    onclick: move |_| editing.set(Some(None)),
                    "Add User"
                }
            }

            if let Some(target) = editing() {
                UserForm {
                    key: "{editor_key(target.as_ref())}",
                    user: target.clone(),
                    on_done: move |_| {
                        editing.set(None);
                        revision += 1;
                    },
                    on_cancel: move |_| editing.set(None),
                }
            }

            input {
                class: "search",
                r#type: "search",
                placeholder: "Search by name, email or roll number...",
                value: "{query}",
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }

            table {
                class: "table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Roll number" }
                        th { "Role" }
                        th { "" }
                    }
                }
                tbody {
                    for user in users {
                        tr {
                            key: "{user.id}",
                            td { "{user.name}" }
                            td { "{user.email}" }
                            td { "{user.roll_number}" }
                            td { {user.role().label()} }
                            td {
                                button {
                                    class: "btn small",
                                    onclick: {
                                        let user = user.clone();
                                        move |_| editing.set(Some(Some(user.clone())))
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn small danger",
                                    onclick: {
                                        let portal = portal.clone();
                                        let id = user.id.clone();
                                        move |_| match portal.directory().delete(&id) {
                                            Ok(_) => {
                                                notify(&mut notices, NoticeLevel::Success, "User deleted");
                                                revision += 1;
                                            }
                                            Err(e) => notify(&mut notices, NoticeLevel::Error, &e.to_string()),
                                        }
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UserForm(user: Option<User>, on_done: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let portal = use_portal();
    let mut notices = use_notices();
    let existing_id = user.as_ref().map(|u| u.id.clone());
    let mut name = use_signal(|| user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut roll_number = use_signal(|| {
        user.as_ref()
            .map(|u| u.roll_number.clone())
            .unwrap_or_default()
    });
    let mut role = use_signal(|| user.as_ref().map(User::role).unwrap_or_default());
    let mut detail = use_signal(|| {
        user.as_ref()
            .and_then(|u| u.affiliation.detail())
            .unwrap_or_default()
            .to_string()
    });

    let email_preview = portal.directory().generate_email(&name(), &roll_number());

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = UserDraft::new(name(), roll_number(), affiliation_for(role(), &detail()));
        let directory = portal.directory();
        let result = match &existing_id {
            Some(id) => directory.update(id, &draft).map(|_| "User updated"),
            None => directory.add(&draft).map(|_| "User added"),
        };
        match result {
            Ok(message) => {
                notify(&mut notices, NoticeLevel::Success, message);
                on_done.call(());
            }
            Err(e) => notify(&mut notices, NoticeLevel::Error, &e.to_string()),
        }
    };

    let current_role = role();
    let options = detail_options(current_role);

    rsx! {
        form {
            class: "card form",
            onsubmit: onsubmit,
            h2 { class: "card-title", if user.is_some() { "Edit User" } else { "Add User" } }
            label { "Full name" }
            input { value: "{name}", oninput: move |evt: FormEvent| name.set(evt.value()) }
            label { "Roll number" }
            input { value: "{roll_number}", oninput: move |evt: FormEvent| roll_number.set(evt.value()) }
            label { "Role" }
            select {
                onchange: move |evt: FormEvent| {
                    if let Some(r) = Role::parse(&evt.value()) {
                        role.set(r);
                        detail.set(String::new());
                    }
                },
                for r in Role::ALL {
                    option { value: r.as_str(), selected: current_role == r, {r.label()} }
                }
            }
            if !options.is_empty() {
                label { "Details" }
                select {
                    onchange: move |evt: FormEvent| detail.set(evt.value()),
                    option { value: "", "None" }
                    for o in options {
                        option { value: o, selected: detail() == o, {o} }
                    }
                }
            }
            p { class: "muted", "Email: {email_preview}" }
            div {
                class: "form-actions",
                button { class: "btn primary", r#type: "submit", "Save" }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson2023fac001@campus.edu".to_string(),
            roll_number: "2023FAC001".to_string(),
            affiliation: Affiliation::Faculty {
                department: Some(Department::ComputerScience),
            },
            created_at: None,
        }
    }

    #[test]
    fn test_editor_key_differs_per_target() {
        let a = user("1");
        let b = user("2");
        assert_ne!(editor_key(Some(&a)), editor_key(Some(&b)));
        assert_ne!(editor_key(Some(&a)), editor_key(None));
        assert_eq!(editor_key(Some(&a)), editor_key(Some(&a.clone())));
    }

    #[test]
    fn test_affiliation_for_role_and_detail() {
        assert_eq!(
            affiliation_for(Role::Staff, "Event Manager"),
            Affiliation::Staff {
                staff_type: Some(StaffType::EventManager)
            }
        );
        assert_eq!(
            affiliation_for(Role::Student, ""),
            Affiliation::Student { major: None }
        );
        assert!(detail_options(Role::Admin).is_empty());
    }
}
