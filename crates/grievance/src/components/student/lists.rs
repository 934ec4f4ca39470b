use dioxus::prelude::*;
use grievance_core::view::student::{OwnFeedbackList, StatusList};

#[component]
pub fn StatusListView(list: StatusList) -> Element {
    rsx! {
        div { class: "gp-card",
            h3 { class: "gp-card-title", "My Complaint Status" }
            if list.shows_empty_message() {
                p { class: "gp-empty", "You have not submitted any complaints yet." }
            } else {
                ul { class: "gp-status-list", id: "status-list",
                    for (i, entry) in list.entries.iter().enumerate() {
                        li { key: "{i}", class: "gp-status-item",
                            span { class: "gp-status-title", "{entry.title}" }
                            span { class: "{entry.badge_class}", "{entry.status}" }
                        }
                    }
                }
            }
        }
    }
}

/// Hidden when the student has not left any feedback.
#[component]
pub fn OwnFeedbackView(list: OwnFeedbackList) -> Element {
    if list.is_hidden() {
        return rsx! {};
    }

    rsx! {
        div { class: "gp-card", id: "my-feedback-section",
            h3 { class: "gp-card-title", "My Feedback" }
            ul { class: "gp-status-list",
                for (i, line) in list.lines.iter().enumerate() {
                    li { key: "{i}", class: "gp-status-item", "{line}" }
                }
            }
        }
    }
}
