use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::{use_portal, use_snapshot};
use crate::state::Screen;

/// Top bar with the portal title, the signed-in identity and logout.
#[component]
pub fn AppBar(screen: Screen, on_home: EventHandler<()>) -> Element {
    let portal = use_portal();
    let snapshot = use_snapshot();
    let on_dashboard = matches!(screen, Screen::Admin | Screen::Student);
    let identity = snapshot.read().identity.clone();

    let handle_logout = move |_| {
        let portal = portal.clone();
        spawn(async move {
            portal.lock().await.logout();
            debug!("Returned to landing");
            on_home.call(());
        });
    };

    rsx! {
        header { class: "gp-appbar",
            div { class: "gp-appbar-brand",
                span { class: "gp-appbar-logo", "\u{1f393}" }
                h1 { class: "gp-appbar-title", "Student Grievance Portal" }
            }
            if on_dashboard {
                div { class: "gp-appbar-session",
                    if let Some(email) = identity {
                        span { class: "gp-appbar-identity", "{email}" }
                    }
                    button {
                        class: "gp-btn gp-btn--secondary",
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }
        }
    }
}
