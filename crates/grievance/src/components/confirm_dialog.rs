//! Confirmation modal shown before a submission is sent.

use dioxus::prelude::*;

/// Yes/no modal. Clicking the backdrop counts as cancel.
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        // Modal backdrop
        div {
            class: "gp-modal-backdrop",
            onclick: move |_| on_cancel.call(()),

            // Modal content (stop propagation to prevent close on content click)
            div {
                class: "gp-modal",
                onclick: move |e| e.stop_propagation(),

                div { class: "gp-modal-header",
                    h2 { class: "gp-modal-title", "Please confirm" }
                }
                div { class: "gp-modal-content",
                    p { "{message}" }
                    div { class: "gp-modal-buttons",
                        button {
                            class: "gp-btn gp-btn--secondary",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        button {
                            class: "gp-btn gp-btn--primary",
                            onclick: move |_| on_confirm.call(()),
                            "Yes, Submit"
                        }
                    }
                }
            }
        }
    }
}
