use dioxus::prelude::*;

use crate::components::use_toast;

/// Renders the current acknowledgment until the user dismisses it.
#[component]
pub fn ToastHost() -> Element {
    let mut toast = use_toast();
    let current = toast.read().clone();

    rsx! {
        if let Some(current) = current {
            div { class: current.class(), role: "status",
                span { class: "gp-toast-message", "{current.message}" }
                button {
                    class: "gp-toast-close",
                    "aria-label": "Dismiss",
                    onclick: move |_| toast.set(None),
                    "\u{2715}"
                }
            }
        }
    }
}
