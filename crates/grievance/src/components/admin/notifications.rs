use dioxus::prelude::*;
use grievance_core::view::notifications::{NotificationBadge, MODAL_TITLE};

/// Bell with a count of old pending complaints; opens a list on click.
#[component]
pub fn NotificationBell(badge: NotificationBadge, lines: Vec<String>) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "gp-notifications",
            button {
                class: "gp-notification-bell",
                "aria-label": "Old pending complaints",
                onclick: move |_| open.set(true),
                "\u{1f514}"
                if badge.is_visible() {
                    span { class: "gp-notification-count", id: "notification-count", "{badge.count}" }
                }
            }

            if open() {
                div {
                    class: "gp-modal-backdrop",
                    onclick: move |_| open.set(false),
                    div {
                        class: "gp-modal gp-notification-list",
                        onclick: move |e| e.stop_propagation(),
                        div { class: "gp-modal-header",
                            h3 { class: "gp-modal-title", "{MODAL_TITLE}" }
                            button {
                                class: "gp-modal-close",
                                "aria-label": "Close notifications",
                                onclick: move |_| open.set(false),
                                "\u{2715}"
                            }
                        }
                        div { class: "gp-modal-content",
                            for (idx, line) in lines.iter().enumerate() {
                                div { key: "{idx}", class: "gp-notification-item", "{line}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
