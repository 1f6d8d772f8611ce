//! Toast notification context.
//!
//! [`ToastProvider`] owns the toast list and renders the floating stack on
//! top of its children; any view pushes into it through [`push_toast`].
//! Toasts dismiss themselves after a few seconds or on click.

use std::time::Duration;

use dioxus::prelude::*;

const TOAST_DURATION: Duration = Duration::from_millis(3800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toasts {
    next_id: u64,
    pub entries: Vec<Toast>,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Queue a toast and schedule its auto-dismiss.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: impl Into<String>) {
    let id = {
        let mut state = toasts.write();
        state.next_id += 1;
        let id = state.next_id;
        state.entries.insert(
            0,
            Toast {
                id,
                level,
                message: message.into(),
            },
        );
        id
    };

    let mut toasts = *toasts;
    spawn(async move {
        api::sleep(TOAST_DURATION).await;
        toasts.write().entries.retain(|t| t.id != id);
    });
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
        ToastStack {}
    }
}

#[component]
fn ToastStack() -> Element {
    let toasts = use_toasts();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts().entries {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    rsx! {
        div {
            class: toast.level.class(),
            role: "status",
            onclick: move |_| {
                toasts.write().entries.retain(|t| t.id != id);
            },
            "{toast.message}"
        }
    }
}
