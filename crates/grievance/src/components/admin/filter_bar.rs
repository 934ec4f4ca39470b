use dioxus::prelude::*;
use grievance_core::config::DEPARTMENTS;

/// A filter control was used. Filters never combine: each request replaces
/// whatever was shown before.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterRequest {
    Search(String),
    Date(String),
    Department(String),
    Clear,
}

#[component]
pub fn FilterBar(filtered: bool, on_filter: EventHandler<FilterRequest>) -> Element {
    let mut query = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut department = use_signal(String::new);

    let handle_keypress = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            on_filter.call(FilterRequest::Search(query.read().clone()));
        }
    };

    rsx! {
        div { class: "gp-filter-bar",
            div { class: "gp-filter-group",
                input {
                    class: "gp-input",
                    r#type: "text",
                    placeholder: "Search complaints\u{2026}",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                    onkeypress: handle_keypress,
                }
                button {
                    class: "gp-btn gp-btn--primary",
                    onclick: move |_| on_filter.call(FilterRequest::Search(query.read().clone())),
                    "Search"
                }
            }
            div { class: "gp-filter-group",
                input {
                    class: "gp-input",
                    r#type: "date",
                    value: "{date}",
                    oninput: move |evt| date.set(evt.value()),
                }
                button {
                    class: "gp-btn gp-btn--primary",
                    onclick: move |_| on_filter.call(FilterRequest::Date(date.read().clone())),
                    "Filter by Date"
                }
            }
            div { class: "gp-filter-group",
                select {
                    class: "gp-input",
                    value: "{department}",
                    onchange: move |evt| {
                        department.set(evt.value());
                        on_filter.call(FilterRequest::Department(evt.value()));
                    },
                    option { value: "", "All Departments" }
                    for name in DEPARTMENTS.iter() {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }
            if filtered {
                button {
                    class: "gp-btn gp-btn--secondary",
                    onclick: move |_| {
                        query.set(String::new());
                        date.set(String::new());
                        department.set(String::new());
                        on_filter.call(FilterRequest::Clear);
                    },
                    "Show All"
                }
            }
        }
    }
}
