//! Student dashboard: collapsible complaint and feedback forms plus the
//! student's own complaint statuses and feedback.

mod complaint_form;
mod feedback_form;
mod lists;
mod rating;

use complaint_form::ComplaintFormCard;
use feedback_form::FeedbackFormCard;
use lists::{OwnFeedbackView, StatusListView};

use dioxus::prelude::*;
use grievance_core::portal::ComplaintAck;

use crate::components::use_snapshot;
use crate::state::DuplicateBanner;
use crate::utils::SignalExt;

#[component]
pub fn StudentDashboard() -> Element {
    let snapshot = use_snapshot();
    let mut complaint_open = use_signal(|| false);
    let mut feedback_open = use_signal(|| false);
    let mut banner = use_signal(DuplicateBanner::default);
    let view = snapshot.read().clone();

    rsx! {
        section { class: "gp-dashboard gp-dashboard--student",
            h2 { class: "gp-dashboard-title", "Student Dashboard" }

            if banner.read().is_visible() {
                div { class: "gp-banner gp-banner--duplicate", id: "duplicate-notification",
                    span { "{ComplaintAck::Duplicate.message()}" }
                    button {
                        class: "gp-toast-close",
                        "aria-label": "Dismiss",
                        onclick: move |_| banner.mutate(DuplicateBanner::dismiss),
                        "\u{2715}"
                    }
                }
            }

            div { class: "gp-card",
                button {
                    class: "gp-card-toggle",
                    onclick: move |_| complaint_open.set(!complaint_open()),
                    h3 { class: "gp-card-title", "Submit a Complaint" }
                    span { class: "gp-caret", if complaint_open() { "\u{25b4}" } else { "\u{25be}" } }
                }
                if complaint_open() {
                    ComplaintFormCard { banner }
                }
            }

            div { class: "gp-card",
                button {
                    class: "gp-card-toggle",
                    onclick: move |_| feedback_open.set(!feedback_open()),
                    h3 { class: "gp-card-title", "Give Feedback" }
                    span { class: "gp-caret", if feedback_open() { "\u{25b4}" } else { "\u{25be}" } }
                }
                if feedback_open() {
                    FeedbackFormCard {}
                }
            }

            StatusListView { list: view.status_list.clone() }

            OwnFeedbackView { list: view.own_feedback.clone() }
        }
    }
}
