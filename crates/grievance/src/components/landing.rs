use dioxus::prelude::*;

use crate::components::use_screen;
use crate::state::Screen;

/// Entry screen.
#[component]
pub fn Landing() -> Element {
    let mut screen = use_screen();

    rsx! {
        section { class: "gp-landing",
            h2 { class: "gp-landing-title", "Your voice, heard." }
            p { class: "gp-landing-text",
                "Raise complaints, share feedback and follow their progress. "
                "Administrators triage every submission by priority."
            }
            button {
                class: "gp-btn gp-btn--primary",
                onclick: move |_| screen.set(Screen::Login),
                "Login"
            }
        }
    }
}
