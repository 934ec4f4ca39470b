use dioxus::prelude::*;
use grievance_core::model::SummaryCounts;

#[component]
pub fn SummaryCounters(summary: SummaryCounts) -> Element {
    let complaints = summary.complaints;
    let feedback_total = summary.feedback.total;
    let local = summary.complaints_local || summary.feedback_local;

    rsx! {
        div { class: "gp-summary",
            div { class: "gp-summary-item",
                span { class: "gp-summary-value", id: "total-count", "{complaints.total}" }
                span { class: "gp-summary-label", "Total Complaints" }
            }
            div { class: "gp-summary-item gp-summary-item--pending",
                span { class: "gp-summary-value", id: "pending-count", "{complaints.pending}" }
                span { class: "gp-summary-label", "Pending" }
            }
            div { class: "gp-summary-item gp-summary-item--resolved",
                span { class: "gp-summary-value", id: "resolved-count", "{complaints.resolved}" }
                span { class: "gp-summary-label", "Resolved" }
            }
            div { class: "gp-summary-item",
                span { class: "gp-summary-value", id: "feedback-count", "{feedback_total}" }
                span { class: "gp-summary-label", "Feedback" }
            }
            if local {
                p { class: "gp-summary-hint", "Counted from the last loaded data." }
            }
        }
    }
}
