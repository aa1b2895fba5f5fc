//! Login, signup and administrator login on one page.

use dioxus::prelude::*;
use portal::models::{Department, Major, Role, StaffType};
use portal::SignupForm;

use crate::notices::{notify, use_notices, NoticeLevel};
use crate::session::{refresh_session, use_portal, use_session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Signup,
    Admin,
}

/// Entry page. Every successful flow lands on `/dashboard`.
#[component]
pub fn AuthPage() -> Element {
    let mut mode = use_signal(|| AuthMode::Login);
    let portal = use_portal();
    let site_name = portal.settings().load().site_name;

    rsx! {
        div {
            class: "auth-container",
            h1 { class: "auth-title", "{site_name}" }
            p { class: "auth-subtitle", "Your campus in one place" }

            div {
                class: "auth-tabs",
                button {
                    class: if mode() == AuthMode::Login { "auth-tab active" } else { "auth-tab" },
                    onclick: move |_| mode.set(AuthMode::Login),
                    "Login"
                }
                button {
                    class: if mode() == AuthMode::Signup { "auth-tab active" } else { "auth-tab" },
                    onclick: move |_| mode.set(AuthMode::Signup),
                    "Sign up"
                }
            }

            match mode() {
                AuthMode::Login => rsx! { LoginForm {} },
                AuthMode::Signup => rsx! { SignupFormView {} },
                AuthMode::Admin => rsx! { AdminLoginForm {} },
            }

            if mode() != AuthMode::Admin {
                button {
                    class: "auth-link",
                    onclick: move |_| mode.set(AuthMode::Admin),
                    "Administrator login"
                }
            } else {
                button {
                    class: "auth-link",
                    onclick: move |_| mode.set(AuthMode::Login),
                    "Back to user login"
                }
            }
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let portal = use_portal();
    let mut session = use_session();
    let mut notices = use_notices();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut roll_number = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if name().trim().is_empty() || roll_number().trim().is_empty() {
            notify(&mut notices, NoticeLevel::Error, "Please enter both name and roll number");
            return;
        }
        match portal.auth().login(&name(), &roll_number()) {
            Ok(user) => {
                refresh_session(&portal, &mut session);
                notify(&mut notices, NoticeLevel::Success, &format!("Welcome back, {}!", user.name));
                nav.push("/dashboard");
            }
            Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Login failed: {e}")),
        }
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: onsubmit,
            label { "Full name" }
            input {
                r#type: "text",
                placeholder: "John Smith",
                value: "{name}",
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            label { "Roll number" }
            input {
                r#type: "text",
                placeholder: "2023CS001",
                value: "{roll_number}",
                oninput: move |evt: FormEvent| roll_number.set(evt.value()),
            }
            button { class: "btn primary", r#type: "submit", "Login" }
            p {
                class: "auth-hint",
                "Demo accounts: John Smith / 2023CS001, Sarah Johnson / 2023FAC001, Mike Davis / 2023STF001"
            }
        }
    }
}

#[component]
fn SignupFormView() -> Element {
    let portal = use_portal();
    let mut session = use_session();
    let mut notices = use_notices();
    let nav = use_navigator();
    let mut form = use_signal(SignupForm::default);

    let preview = {
        let f = form();
        if f.name.trim().is_empty() || f.roll_number.trim().is_empty() {
            None
        } else {
            Some(portal.directory().generate_email(&f.name, &f.roll_number))
        }
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        match portal.auth().signup(form()) {
            Ok(user) => {
                refresh_session(&portal, &mut session);
                notify(&mut notices, NoticeLevel::Success, &format!("Account created for {}", user.email));
                nav.push("/dashboard");
            }
            Err(e) => notify(&mut notices, NoticeLevel::Error, &e.to_string()),
        }
    };

    let current = form();
    let role = current.role;

    rsx! {
        form {
            class: "auth-form",
            onsubmit: onsubmit,
            label { "Full name" }
            input {
                r#type: "text",
                value: "{current.name}",
                oninput: move |evt: FormEvent| form.write().name = evt.value(),
            }
            label { "Roll number" }
            input {
                r#type: "text",
                value: "{current.roll_number}",
                oninput: move |evt: FormEvent| form.write().roll_number = evt.value(),
            }
            label { "Role" }
            select {
                onchange: move |evt: FormEvent| form.write().role = Role::parse(&evt.value()),
                option { value: "", "Select a role" }
                for r in Role::ALL.into_iter().filter(|r| *r != Role::Admin) {
                    option { value: r.as_str(), selected: role == Some(r), {r.label()} }
                }
            }
            match role {
                Some(Role::Student) => rsx! {
                    label { "Major" }
                    select {
                        onchange: move |evt: FormEvent| form.write().major = Major::parse(&evt.value()),
                        option { value: "", "Select a major" }
                        for m in Major::ALL {
                            option { value: m.as_str(), {m.as_str()} }
                        }
                    }
                },
                Some(Role::Faculty) => rsx! {
                    label { "Department" }
                    select {
                        onchange: move |evt: FormEvent| form.write().department = Department::parse(&evt.value()),
                        option { value: "", "Select a department" }
                        for d in Department::ALL {
                            option { value: d.as_str(), {d.as_str()} }
                        }
                    }
                },
                Some(Role::Staff) => rsx! {
                    label { "Staff type" }
                    select {
                        onchange: move |evt: FormEvent| form.write().staff_type = StaffType::parse(&evt.value()),
                        option { value: "", "Select a staff type" }
                        for s in StaffType::ALL {
                            option { value: s.as_str(), {s.as_str()} }
                        }
                    }
                },
                _ => rsx! {},
            }
            if let Some(email) = preview {
                p { class: "auth-hint", "Your email will be {email}" }
            }
            button { class: "btn primary", r#type: "submit", "Create account" }
        }
    }
}

#[component]
fn AdminLoginForm() -> Element {
    let portal = use_portal();
    let mut session = use_session();
    let mut notices = use_notices();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        match portal.auth().login_admin(&email(), &password()) {
            Ok(_) => {
                refresh_session(&portal, &mut session);
                notify(&mut notices, NoticeLevel::Success, "Logged in as administrator");
                nav.push("/dashboard");
            }
            Err(e) => notify(&mut notices, NoticeLevel::Error, &format!("Login failed: {e}")),
        }
    };

    rsx! {
        form {
            class: "auth-form",
            onsubmit: onsubmit,
            label { "Email" }
            input {
                r#type: "email",
                value: "{email}",
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            label { "Password" }
            input {
                r#type: "password",
                value: "{password}",
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            button { class: "btn primary", r#type: "submit", "Login as administrator" }
        }
    }
}
