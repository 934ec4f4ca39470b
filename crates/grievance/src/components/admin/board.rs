use dioxus::prelude::*;
use grievance_core::model::ComplaintId;
use grievance_core::view::board::{ComplaintCard, FeedbackCard, TriageBoard};

/// High / Medium / Low columns of complaint cards.
#[component]
pub fn TriageBoardView(board: TriageBoard, on_resolve: EventHandler<ComplaintId>) -> Element {
    rsx! {
        div { class: "gp-board",
            for group in board.groups.iter() {
                section {
                    key: "{group.section_id()}",
                    class: "gp-board-column",
                    id: group.section_id(),
                    h3 { class: "gp-board-heading", "{group.heading()}" }
                    div { class: "items",
                        for card in group.cards.iter() {
                            ComplaintCardView {
                                key: "{card.id}",
                                card: card.clone(),
                                on_resolve,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ComplaintCardView(card: ComplaintCard, on_resolve: EventHandler<ComplaintId>) -> Element {
    let id = card.id;

    rsx! {
        div { class: "item-card",
            div { class: "gp-card-row",
                h4 { class: "gp-item-title", "{card.title}" }
                span { class: card.badge_class, "{card.badge_label}" }
            }
            if let Some(line) = &card.submitter_line {
                p { class: "gp-item-meta", "{line}" }
            }
            p { class: "gp-item-meta", "{card.date}" }
            p { class: "gp-item-meta", "{card.department_label}" }
            p { class: "gp-item-description", "{card.description}" }
            if card.resolvable {
                button {
                    class: "gp-btn gp-btn--resolve",
                    onclick: move |_| on_resolve.call(id),
                    "Resolve"
                }
            }
        }
    }
}

#[component]
pub fn FeedbackPanel(cards: Vec<FeedbackCard>) -> Element {
    rsx! {
        section { class: "gp-feedback-panel",
            h3 { class: "gp-section-title", "Feedback" }
            if cards.is_empty() {
                p { class: "gp-empty", "No feedback yet." }
            }
            for (idx, card) in cards.iter().enumerate() {
                div { key: "{idx}", class: "item-card",
                    p { class: "gp-item-title", "{card.rating_line}" }
                    p { class: "gp-item-description", "{card.text}" }
                    if let Some(line) = &card.submitter_line {
                        p { class: "gp-item-meta", "{line}" }
                    }
                    p { class: "gp-item-meta", "{card.date}" }
                }
            }
        }
    }
}
