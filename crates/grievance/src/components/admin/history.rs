use dioxus::prelude::*;
use grievance_core::view::history::{ComplaintHistoryRow, FeedbackHistoryRow};

#[component]
pub fn HistoryLists(
    complaints: Vec<ComplaintHistoryRow>,
    feedback: Vec<FeedbackHistoryRow>,
) -> Element {
    rsx! {
        div { class: "gp-history",
            section { class: "gp-history-section",
                h3 { class: "gp-section-title", "Complaint History" }
                div { id: "complaints-history-list",
                    for (idx, row) in complaints.iter().enumerate() {
                        div { key: "{idx}", class: "history-item",
                            div { class: "gp-card-row",
                                h4 { class: "gp-item-title", "{row.title}" }
                                span { class: row.status_class, "{row.status_label}" }
                            }
                            p { class: "gp-item-description", "{row.description}" }
                            p { class: "gp-item-meta", "{row.priority_line}" }
                            p { class: "gp-item-meta", "{row.department_label}" }
                            p { class: "gp-item-meta", "{row.date}" }
                        }
                    }
                }
            }
            section { class: "gp-history-section",
                h3 { class: "gp-section-title", "Feedback History" }
                div { id: "feedback-history-list",
                    for (idx, row) in feedback.iter().enumerate() {
                        div { key: "{idx}", class: "history-item",
                            p { class: "gp-item-title", "{row.rating_line}" }
                            p { class: "gp-item-description", "{row.text}" }
                            p { class: "gp-item-meta", "{row.date}" }
                        }
                    }
                }
            }
        }
    }
}
