//! Toasts for login and form results.
//!
//! Every toast has a close button. On the web build, info and success toasts
//! also go away on their own after [`AUTO_DISMISS_SECS`]; errors stay until
//! dismissed so the message can be read.

use dioxus::prelude::*;

/// Toasts kept on screen at once; pushing more drops the oldest.
const MAX_TOASTS: usize = 4;

pub const AUTO_DISMISS_SECS: u64 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub fn auto_dismiss(self) -> bool {
        self != NoticeLevel::Error
    }

    fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "toast info",
            NoticeLevel::Success => "toast success",
            NoticeLevel::Error => "toast error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// The toasts currently shown, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notices {
    toasts: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// Show a toast and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Notice {
            id,
            level,
            message: message.into(),
        });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
        id
    }

    /// Remove the toast with `id`. Returns whether it was still shown.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Notice] {
        &self.toasts
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

pub fn notify(notices: &mut Signal<Notices>, level: NoticeLevel, message: &str) {
    if level == NoticeLevel::Error {
        tracing::info!(message, "error shown to user");
    }
    notices.write().push(level, message);
}

/// Fixed-position stack rendering every shown toast.
#[component]
pub fn NoticeStack() -> Element {
    let notices = use_notices();
    let toasts = notices.read().toasts().to_vec();

    if toasts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "toast-stack",
            role: "status",
            for notice in toasts {
                Toast { key: "{notice.id}", notice: notice.clone() }
            }
        }
    }
}

#[component]
fn Toast(notice: Notice) -> Element {
    let mut notices = use_notices();
    let id = notice.id;

    #[cfg(target_arch = "wasm32")]
    use_hook(move || {
        if notice.level.auto_dismiss() {
            spawn(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(AUTO_DISMISS_SECS)).await;
                notices.write().dismiss(id);
            });
        }
    });

    rsx! {
        div {
            class: notice.level.class(),
            span { class: "toast-message", "{notice.message}" }
            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| {
                    notices.write().dismiss(id);
                },
                "\u{00D7}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut notices = Notices::default();
        let a = notices.push(NoticeLevel::Info, "first");
        let b = notices.push(NoticeLevel::Error, "second");
        assert!(b > a);
        assert_eq!(notices.toasts().len(), 2);
        assert_eq!(notices.toasts()[1].message, "second");
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut notices = Notices::default();
        let a = notices.push(NoticeLevel::Success, "saved");
        let b = notices.push(NoticeLevel::Info, "logged out");

        assert!(notices.dismiss(a));
        assert!(!notices.dismiss(a));
        let ids: Vec<u64> = notices.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![b]);
    }

    #[test]
    fn test_oldest_toasts_drop_past_the_limit() {
        let mut notices = Notices::default();
        for i in 0..MAX_TOASTS + 2 {
            notices.push(NoticeLevel::Info, format!("toast {i}"));
        }
        assert_eq!(notices.toasts().len(), MAX_TOASTS);
        assert_eq!(notices.toasts()[0].message, "toast 2");
    }

    #[test]
    fn test_errors_are_not_auto_dismissed() {
        assert!(NoticeLevel::Info.auto_dismiss());
        assert!(NoticeLevel::Success.auto_dismiss());
        assert!(!NoticeLevel::Error.auto_dismiss());
    }
}
