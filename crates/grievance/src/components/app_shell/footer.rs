use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "gp-footer",
            span { class: "gp-footer-text",
                "Student Grievance Portal \u{2022} Complaints and feedback reach the administration directly."
            }
        }
    }
}
